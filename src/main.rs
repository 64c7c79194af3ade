fn main() {
    odl_apidoc::start();
}
