fn main() {
    math_sheet::run();
}
