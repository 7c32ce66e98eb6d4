use simple_factory::simple_factory;

struct Greeter;

#[simple_factory("say")]
impl Greeter {
    fn say(&self) -> &'static str {
        "hi"
    }
}

fn main() {
    assert_eq!(Greeter.say(), "hi");
}
