use simple_factory::{simple_factory, Construct, SimpleFactory};

#[derive(Construct)]
struct Foo {
    bar: String,
    baz: String,
}

#[simple_factory(say, naysay)]
impl Foo {
    fn say(&self) -> String {
        format!("{} and {}", self.bar, self.baz)
    }

    fn naysay(&self) -> String {
        format!("neither {} nor {}", self.bar, self.baz)
    }
}

fn main() {
    let args = || ("this".to_owned(), "that".to_owned());
    assert_eq!(Foo::shortcut("say", args()).unwrap(), "this and that");
    assert_eq!(Foo::shortcut("naysay", args()).unwrap(), "neither this nor that");
    assert_eq!(Foo::shortcut("say", args()).unwrap(), Foo::new("this".into(), "that".into()).say());
}
