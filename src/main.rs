fn main() {
    std::process::exit(bodycheck::run().into());
}
