fn main() {
    run_and_gun::game::run();
}
