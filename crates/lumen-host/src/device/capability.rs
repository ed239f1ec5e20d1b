/// Cores per streaming multiprocessor, keyed by compute capability.
///
/// Key encoding is `(major << 4) | minor`.
const CORES_PER_SM: &[(u32, u32)] = &[
    (0x10, 8),
    (0x11, 8),
    (0x12, 8),
    (0x13, 8),
    (0x20, 32),
    (0x21, 48),
    (0x30, 192),
    (0x32, 192),
    (0x35, 192),
    (0x37, 192),
    (0x50, 128),
    (0x52, 128),
    (0x53, 128),
    (0x60, 64),
    (0x61, 128),
    (0x62, 128),
    (0x70, 64),
    (0x72, 64),
    (0x75, 64),
    (0x80, 64),
    (0x86, 128),
    (0x87, 128),
    (0x89, 128),
    (0x90, 128),
];

/// Returns the number of cores per multiprocessor for a capability version.
///
/// `None` means the hardware generation is unknown. There is no fallback
/// value; a wrong count would skew every occupancy decision downstream.
pub fn cores_per_multiprocessor(major: u32, minor: u32) -> Option<u32> {
    // Minor versions above 0xF would alias the next major.
    if minor > 0xF {
        return None;
    }
    let key = (major << 4) | minor;
    CORES_PER_SM
        .iter()
        .find(|&&(sm, _)| sm == key)
        .map(|&(_, cores)| cores)
}
