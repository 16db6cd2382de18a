fn main() {
    multiversx_sc_meta_lib::cli_main::<mint_controller::AbiProvider>();
}
