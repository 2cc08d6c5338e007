/// Token byte classification (RFC 7230 `tchar`)
/// Returns: true for any ASCII byte that is neither a control nor a separator
const TOKEN_CHAR_TABLE: [bool; 256] = {
    let mut table = [false; 256];

    // Visible ASCII is the starting point; controls, SP and DEL stay false
    let mut i = b'!';
    while i <= b'~' {
        table[i as usize] = true;
        i += 1;
    }

    // Separators
    let separators = b"()<>@,;:\\\"/[]?={}";
    let mut i = 0;
    while i < separators.len() {
        table[separators[i] as usize] = false;
        i += 1;
    }

    table
};

/// Bytes allowed in a `Host` header value.
/// Looser than RFC 3986 reg-name so that IP literals and ports pass.
const HOST_BYTE_TABLE: [bool; 256] = {
    let mut table = [false; 256];

    let mut i = b'a';
    while i <= b'z' {
        table[i as usize] = true;
        i += 1;
    }
    let mut i = b'A';
    while i <= b'Z' {
        table[i as usize] = true;
        i += 1;
    }
    let mut i = b'0';
    while i <= b'9' {
        table[i as usize] = true;
        i += 1;
    }

    let extra = b"!$%&'()*+,-.:;=[]_~";
    let mut i = 0;
    while i < extra.len() {
        table[extra[i] as usize] = true;
        i += 1;
    }

    table
};

/// Check if a byte may appear in a token
pub fn is_token_byte(b: u8) -> bool {
    TOKEN_CHAR_TABLE[b as usize]
}

/// Check if a character may appear in a token.
/// Anything outside 7-bit ASCII is rejected before the table lookup.
pub fn is_token_char(c: char) -> bool {
    u8::try_from(c).is_ok_and(is_token_byte)
}

/// Check if a byte may appear in a `Host` header value
pub fn is_host_byte(b: u8) -> bool {
    HOST_BYTE_TABLE[b as usize]
}

/// Check if a byte is a control (CTL in RFC 7230)
pub fn is_ctl(b: u8) -> bool {
    b < b' ' || b == 0x7F
}

/// Check if a byte is optional whitespace (SP or HTAB)
pub fn is_ows(b: u8) -> bool {
    matches!(b, b' ' | b'\t')
}
