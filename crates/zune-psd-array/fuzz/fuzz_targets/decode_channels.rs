#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    use zune_psd_array::bit_depth::decode_samples;
    use zune_psd_array::grid::assemble;

    if data.len() < 3 {
        return;
    }
    // first byte picks the depth, second the width
    let depth = [1, 8, 16, 32][usize::from(data[0] & 3)];
    let width = usize::from(data[1]).max(1);
    let data = &data[2..];

    if let Ok(samples) = decode_samples(data, depth) {
        let height = samples.len() / width;
        let _ = assemble(&[samples], height, width);
    }
});
