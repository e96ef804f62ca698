//! Hardware smoke tests
//!
//! These need a Tegra with the GPIO block at 0x6000d000 and root privilege.

use tegra_gpio_driver::prelude::*;

#[test]
#[ignore] // Requires hardware
fn map_and_snapshot_single_bank() {
    let bank = BankConfig::single_bank();
    let mem = DevMem::open().expect("open /dev/mem (root)");
    let page = mem.map_page(bank.base).expect("map GPIO page");
    let offset = page.offset();

    let view = BankView::new(page, offset, bank.layout, bank.port).expect("overlay");
    for (field, value) in view.snapshot().expect("snapshot") {
        println!("{field:<8} = {value:#010x}");
    }
}

#[test]
#[ignore] // Requires hardware
fn init_then_read_back() {
    let bank = BankConfig::multi_controller(1, 0).unwrap();
    let mem = DevMem::open().expect("open /dev/mem (root)");
    let page = mem.map_page(bank.base).expect("map GPIO page");
    let offset = page.offset();

    let mut view = BankView::new(page, offset, bank.layout, bank.port).expect("overlay");
    view.init().expect("init");

    assert_eq!(view.read(Field::Oe).unwrap() & 0xFF, 0xFF);
    assert_eq!(view.read(Field::Out).unwrap() & 0xFF, 0xFF);
}
