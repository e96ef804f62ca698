//! Page-alignment arithmetic for physical-memory mappings.
//!
//! `/dev/mem` mappings must begin on a page boundary; the register block we
//! actually want almost never does. The split is computed once: round the
//! physical address down to the containing page, map that page, then index
//! into it by the remainder.

/// Physical address of the page containing `addr`.
///
/// # Panics
///
/// Panics if `page_size` is not a power of two.
#[must_use]
pub fn base(addr: u64, page_size: usize) -> u64 {
    assert!(page_size.is_power_of_two(), "page size must be a power of two");
    addr & !(page_size as u64 - 1)
}

/// Byte offset of `addr` within its page. Always `< page_size`.
///
/// # Panics
///
/// Panics if `page_size` is not a power of two.
#[must_use]
#[allow(clippy::cast_possible_truncation)] // result is masked below page_size
pub fn offset(addr: u64, page_size: usize) -> usize {
    assert!(page_size.is_power_of_two(), "page size must be a power of two");
    (addr & (page_size as u64 - 1)) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addrs::SINGLE_BANK_ADDR;

    const PAGES: [usize; 4] = [0x1000, 0x4000, 0x10000, 0x20_0000];

    #[test]
    fn base_plus_offset_reconstructs_address() {
        let addrs = [0, 1, 0xFFF, 0x1000, SINGLE_BANK_ADDR, 0x6000_d7FC, u64::MAX - 0xFFF];
        for page in PAGES {
            for addr in addrs {
                let b = base(addr, page);
                let o = offset(addr, page);
                assert_eq!(b + o as u64, addr);
                assert!(o < page);
                assert_eq!(b % page as u64, 0);
            }
        }
    }

    #[test]
    fn gpio_bank_lands_at_expected_page_offset() {
        // 4 KB pages: 0x6000_d100 maps as page 0x6000_d000 + 0x100.
        assert_eq!(base(SINGLE_BANK_ADDR, 0x1000), 0x6000_d000);
        assert_eq!(offset(SINGLE_BANK_ADDR, 0x1000), 0x100);
    }

    #[test]
    fn aligned_address_has_zero_offset() {
        for page in PAGES {
            assert_eq!(offset(0x6000_0000, page), 0);
            assert_eq!(base(0x6000_0000, page), 0x6000_0000);
        }
    }

    #[test]
    #[should_panic(expected = "power of two")]
    fn rejects_non_power_of_two_page() {
        base(0x6000_d100, 0x1001);
    }
}
