//! The three patterns that pull inventory fields out of Cisco `show` output.
//!
//! They are deliberately loose: device output drifts between hardware
//! families and IOS releases, and a missed record is worse than a stray match
//! that alignment later rejects.

use once_cell::sync::Lazy;
use regex::Regex;

/// `HOSTNAME#sh ver`, `HOSTNAME#show version | inc serial`, ...
///
/// Captures `hostname`.
pub static HOSTNAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?xi)
        (?P<hostname>\S+)   # prompt token
        \#                  # privileged mode prompt
        sh[ow\s]+ver        # show version, abbreviated or not
        ",
    )
    .expect("hostname regex is valid")
});

/// `System serial number            : ABC2016XYZ`
///
/// Captures `serial_number`.
pub static SERIAL_NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?xi)
        system\s+serial\s+number  # label
        [\x20\t]*:[\x20\t]*         # separator
        (?P<serial_number>\w+)
        ",
    )
    .expect("serial number regex is valid")
});

/// `WS-C2960C-8PC-L    15.0(2)SE5            C2960c405-UNIVERSALK9-M`
/// `WS-C3650-24TD      03.03.03SE        cat3k_caa-universalk9 INSTALL`
///
/// Captures `model_number`, `software_version` and `software_image`. Matched
/// against the whole text, image names are not always line anchored.
pub static MODEL_SOFTWARE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        (?P<model_number>[\w-]+)
        \s+
        (?P<software_version>\d{2}\.[\w.()?]+)
        \s+
        (?P<software_image>\w+[-_][\w-]+-\w+)
        ",
    )
    .expect("model/software regex is valid")
});
