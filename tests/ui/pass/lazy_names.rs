use simple_factory::{simple_factory, Construct, SimpleFactory};

#[derive(Construct)]
#[ctor_name = "open"]
struct Door(bool);

// Names without a method in this block still install a shortcut.
#[simple_factory(later, is_open)]
impl Door {
    fn is_open(&self) -> bool {
        self.0
    }
}

fn main() {
    assert!(Door::responds_to_shortcut("later"));
    assert!(Door::shortcut("later", (true,)).unwrap_err().is_missing_method());
    assert!(Door::open(true).is_open());
}
