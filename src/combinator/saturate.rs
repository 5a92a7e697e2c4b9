//! Fixed-point iteration.

/// Applies `function` starting from `initial` until the result stops changing.
///
/// Returns the first value `v` in the sequence `initial, f(initial),
/// f(f(initial)), ...` for which `f(v) == v`. Equality is supplied by
/// [`PartialEq`].
///
/// The loop has no iteration cap and no cycle detection: if `function` never
/// reaches a fixed point from `initial`, this never returns.
///
/// # Examples
///
/// ```
/// use fnkit::combinator::saturate;
///
/// // Halving converges to 0.
/// assert_eq!(saturate(1000, |&n: &u32| n / 2), 0);
///
/// // Transitive closure of "reachable from 1" over a small graph.
/// let edges = [(1, 2), (2, 3), (3, 1), (4, 5)];
/// let reachable = saturate(vec![1], |nodes: &Vec<i32>| {
///     let mut next = nodes.clone();
///     for &(from, to) in &edges {
///         if nodes.contains(&from) && !next.contains(&to) {
///             next.push(to);
///         }
///     }
///     next
/// });
/// assert_eq!(reachable, vec![1, 2, 3]);
/// ```
pub fn saturate<T, F>(initial: T, mut function: F) -> T
where
    T: PartialEq,
    F: FnMut(&T) -> T,
{
    let mut current = initial;
    loop {
        let next = function(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}
