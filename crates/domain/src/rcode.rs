//! DNS response codes as observed by `validate`, plus the synthetic code
//! this system uses for IDNA conversion failure: `0` on any successful
//! response, the DNS rcode otherwise, and a synthetic `1` when IDNA
//! conversion itself fails — which happens to collide with the real
//! `FORMERR` rcode. Both cases are terminal for the caller (the general
//! crawler disables the domain either way).

pub const RCODE_OK: u16 = 0;
pub const RCODE_IDNA_ERROR: u16 = 1;
pub const RCODE_SERVER_FAILURE: u16 = 2;
pub const RCODE_NAME_ERROR: u16 = 3;

pub fn is_terminal(rcode: u16) -> bool {
    rcode == RCODE_NAME_ERROR || rcode == RCODE_SERVER_FAILURE || rcode == RCODE_IDNA_ERROR
}
