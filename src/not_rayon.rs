/// Schoolbook multiplication of two most-significant-first chunk slices in
/// base `radix`.
///
/// The returned vector has length `a.len() + b.len()` and may carry leading
/// zero chunks.
pub(crate) fn multiply_chunks(a: &[u32], b: &[u32], radix: u64) -> Vec<u32> {
    // u64 holds (R - 1)^2 + (R - 1) + carry for every R <= 10^9
    let mut result = vec![0_u64; a.len() + b.len()];

    for (i, &rhs) in b.iter().enumerate().rev() {
        for (j, &lhs) in a.iter().enumerate().rev() {
            let product = u64::from(lhs) * u64::from(rhs) + result[i + j + 1];

            result[i + j + 1] = product % radix;
            result[i + j] += product / radix;
        }
    }

    result.into_iter().map(|chunk| chunk as u32).collect()
}
