use ::rayon::prelude::*;

/// Column-parallel variant of the schoolbook kernel.
///
/// Every result column `k` collects `a[j] * b[i]` for all `i + j + 1 == k`
/// independently, then carries are resolved from the least significant
/// column. The output matches the sequential kernel exactly.
pub(crate) fn multiply_chunks(a: &[u32], b: &[u32], radix: u64) -> Vec<u32> {
    let len = a.len() + b.len();

    // column 0 only ever receives a carry
    let columns: Vec<u128> = (1..len)
        .into_par_iter()
        .map(|k| {
            let low = (k - 1).saturating_sub(b.len() - 1);
            let high = (k - 1).min(a.len() - 1);

            (low..=high)
                .map(|j| u128::from(a[j]) * u128::from(b[k - 1 - j]))
                .sum::<u128>()
        })
        .collect();

    let radix = u128::from(radix);
    let mut result = vec![0_u32; len];
    let mut carry = 0_u128;

    for (k, column) in columns.into_iter().enumerate().rev() {
        let total = column + carry;
        result[k + 1] = (total % radix) as u32;
        carry = total / radix;
    }
    result[0] = carry as u32;

    result
}
