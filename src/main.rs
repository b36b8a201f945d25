fn main() {
    provkit::app::cli::run();
}
