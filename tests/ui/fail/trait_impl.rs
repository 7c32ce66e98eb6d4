use simple_factory::simple_factory;

struct Plain;

#[simple_factory(clone)]
impl Clone for Plain {
    fn clone(&self) -> Self {
        Plain
    }
}

fn main() {
    let _plain = Plain.clone();
}
