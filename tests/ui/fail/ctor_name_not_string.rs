use simple_factory::Construct;

#[derive(Construct)]
#[ctor_name = 3]
struct Door(bool);

fn main() {
    assert!(Door(true).0);
}
