fn main() {
    std::process::exit(entrychk::run());
}
