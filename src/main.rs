fn main() {
    gradient_tagger_lib::run()
}
