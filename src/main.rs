fn main() {
    podsmith::app::cli::run();
}
