fn main() {
    dwg_cleaner::app::cli::run();
}
