use simple_factory::{simple_factory, Construct};

#[derive(Construct)]
struct Gauge(u8);

#[simple_factory(level, empty)]
impl Gauge {
    fn level(&self) -> u8 {
        self.0
    }

    fn empty(&self) -> bool {
        self.0 == 0
    }
}

fn main() {
    let gauge = Gauge::new(3);
    assert_eq!(gauge.level(), 3);
    assert!(!gauge.empty());
}
