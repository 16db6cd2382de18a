fn main() {
    multiversx_sc_meta_lib::cli_main::<fast_pause_mints::AbiProvider>();
}
