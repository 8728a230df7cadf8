fn main() {
    postfix::main();
}
