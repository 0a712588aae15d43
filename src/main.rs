fn main() {
    whorl::cli::run();
}
