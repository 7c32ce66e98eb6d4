use simple_factory::Construct;

#[derive(Construct)]
enum Light {
    On,
}

fn main() {
    let _light = Light::On;
}
