fn main() {
    eniscope::app::cli::run();
}
