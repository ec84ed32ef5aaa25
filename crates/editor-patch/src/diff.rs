//! Shortest-edit-script diff.
//!
//! The engine aligns two texts with Myers' O(N·D) algorithm in its linear-space form: each
//! subproblem has its common prefix and suffix trimmed (always matched from the left), then the
//! "middle snake" of the remaining region splits it in two and both halves are solved
//! recursively. `N` is the combined length and `D` the edit distance; memory stays O(N).
//!
//! The output is deterministic for a given `(source, target, options)` and already in the
//! canonical form described in [`crate::script`].

use std::ops::{Index, IndexMut};

use unicode_segmentation::UnicodeSegmentation;

use crate::options::{DiffOptions, Granularity};
use crate::script::{EditScript, ScriptBuilder};

/// Compute an edit script that turns `source` into `target`, aligning on characters.
///
/// Equal inputs (including two empty strings) produce the empty script.
///
/// ```rust
/// use editor_patch::{diff, EditOperation};
///
/// let script = diff("hello", "hello world");
/// assert_eq!(
///     script.operations(),
///     &[EditOperation::Copy(5), EditOperation::Insert(" world".to_string())]
/// );
/// ```
pub fn diff(source: &str, target: &str) -> EditScript {
    diff_with_options(source, target, &DiffOptions::default())
}

/// Compute an edit script with explicit [`DiffOptions`].
pub fn diff_with_options(source: &str, target: &str, options: &DiffOptions) -> EditScript {
    if source == target {
        return EditScript::new();
    }

    let script = match options.granularity {
        Granularity::Char => {
            let old: Vec<char> = source.chars().collect();
            let new: Vec<char> = target.chars().collect();
            diff_units(&old, &new, options.max_edit_cost)
        }
        Granularity::Grapheme => {
            let old: Vec<&str> = source.graphemes(true).collect();
            let new: Vec<&str> = target.graphemes(true).collect();
            diff_units(&old, &new, options.max_edit_cost)
        }
    };

    tracing::trace!(
        source_chars = script.source_len(),
        target_chars = script.target_len(),
        operations = script.len(),
        "computed edit script"
    );
    script
}

/// An alignment unit. Lengths reported to the script are always in chars.
trait Unit: PartialEq {
    fn char_len(&self) -> usize;
    fn push_to(&self, out: &mut String);
}

impl Unit for char {
    fn char_len(&self) -> usize {
        1
    }

    fn push_to(&self, out: &mut String) {
        out.push(*self);
    }
}

impl Unit for &str {
    fn char_len(&self) -> usize {
        self.chars().count()
    }

    fn push_to(&self, out: &mut String) {
        out.push_str(self);
    }
}

fn char_len<T: Unit>(units: &[T]) -> usize {
    units.iter().map(Unit::char_len).sum()
}

/// Furthest-reaching x per diagonal `k`, indexable by negative `k`.
struct V {
    offset: isize,
    v: Vec<usize>,
}

impl V {
    fn new(max_d: usize) -> Self {
        Self {
            offset: max_d as isize,
            v: vec![0; 2 * max_d + 1],
        }
    }
}

impl Index<isize> for V {
    type Output = usize;

    fn index(&self, k: isize) -> &usize {
        &self.v[(k + self.offset) as usize]
    }
}

impl IndexMut<isize> for V {
    fn index_mut(&mut self, k: isize) -> &mut usize {
        &mut self.v[(k + self.offset) as usize]
    }
}

fn max_d(old_len: usize, new_len: usize) -> usize {
    (old_len + new_len).div_ceil(2) + 1
}

fn common_prefix_len<T: PartialEq>(old: &[T], new: &[T]) -> usize {
    old.iter().zip(new).take_while(|(a, b)| a == b).count()
}

fn common_suffix_len<T: PartialEq>(old: &[T], new: &[T]) -> usize {
    old.iter()
        .rev()
        .zip(new.iter().rev())
        .take_while(|(a, b)| a == b)
        .count()
}

fn diff_units<T: Unit>(old: &[T], new: &[T], max_cost: Option<usize>) -> EditScript {
    let max_d = max_d(old.len(), new.len());
    let mut vf = V::new(max_d);
    let mut vb = V::new(max_d);
    let mut out = ScriptBuilder::new();
    conquer(old, new, &mut vf, &mut vb, max_cost, &mut out);
    out.finish()
}

fn conquer<T: Unit>(
    old: &[T],
    new: &[T],
    vf: &mut V,
    vb: &mut V,
    max_cost: Option<usize>,
    out: &mut ScriptBuilder,
) {
    let prefix = common_prefix_len(old, new);
    out.copy(char_len(&old[..prefix]));
    let (old, new) = (&old[prefix..], &new[prefix..]);

    let suffix = common_suffix_len(old, new);
    let (old, old_suffix) = old.split_at(old.len() - suffix);
    let new = &new[..new.len() - suffix];

    if old.is_empty() || new.is_empty() {
        replace(old, new, out);
    } else if let Some((x, y)) = find_middle_snake(old, new, vf, vb, max_cost) {
        conquer(&old[..x], &new[..y], vf, vb, max_cost, out);
        conquer(&old[x..], &new[y..], vf, vb, max_cost, out);
    } else {
        tracing::trace!(
            old_units = old.len(),
            new_units = new.len(),
            "edit cost cap reached; replacing region wholesale"
        );
        replace(old, new, out);
    }

    out.copy(char_len(old_suffix));
}

fn replace<T: Unit>(old: &[T], new: &[T], out: &mut ScriptBuilder) {
    out.delete(char_len(old));
    if !new.is_empty() {
        let mut text = String::new();
        for unit in new {
            unit.push_to(&mut text);
        }
        out.insert(&text);
    }
}

/// Find a split point on an optimal path through the edit graph of `old` × `new`.
///
/// Both inputs are non-empty and share no common prefix or suffix. Returns `None` when the
/// search would exceed `max_cost`.
fn find_middle_snake<T: PartialEq>(
    old: &[T],
    new: &[T],
    vf: &mut V,
    vb: &mut V,
    max_cost: Option<usize>,
) -> Option<(usize, usize)> {
    let n = old.len();
    let m = new.len();
    let delta = n as isize - m as isize;
    let odd = delta & 1 == 1;

    vf[1] = 0;
    vb[1] = 0;

    let d_max = max_d(n, m) as isize;
    for d in 0..d_max {
        // Each round extends both the forward and the backward search by one edit.
        if max_cost.is_some_and(|cap| 2 * d as usize > cap) {
            return None;
        }

        for k in (-d..=d).rev().step_by(2) {
            let mut x = if k == -d || (k != d && vf[k - 1] < vf[k + 1]) {
                vf[k + 1]
            } else {
                vf[k - 1] + 1
            };
            let y = (x as isize - k) as usize;
            let (x0, y0) = (x, y);
            if x < n && y < m {
                x += common_prefix_len(&old[x..], &new[y..]);
            }
            vf[k] = x;

            if odd
                && (k - delta).abs() <= d - 1
                && vf[k] + vb[delta - k] >= n
                && x0 <= n
                && y0 <= m
            {
                return Some((x0, y0));
            }
        }

        for k in (-d..=d).rev().step_by(2) {
            let mut x = if k == -d || (k != d && vb[k - 1] < vb[k + 1]) {
                vb[k + 1]
            } else {
                vb[k - 1] + 1
            };
            let mut y = (x as isize - k) as usize;
            if x < n && y < m {
                let advance = common_suffix_len(&old[..n - x], &new[..m - y]);
                x += advance;
                y += advance;
            }
            vb[k] = x;

            if !odd && (k - delta).abs() <= d && vb[k] + vf[delta - k] >= n && x <= n && y <= m {
                return Some((n - x, m - y));
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apply::apply;
    use crate::script::EditOperation::{self, *};
    use pretty_assertions::assert_eq;

    fn ops(source: &str, target: &str) -> Vec<EditOperation> {
        diff(source, target).into_operations()
    }

    fn lcs_len(a: &[char], b: &[char]) -> usize {
        let mut table = vec![vec![0usize; b.len() + 1]; a.len() + 1];
        for i in 0..a.len() {
            for j in 0..b.len() {
                table[i + 1][j + 1] = if a[i] == b[j] {
                    table[i][j] + 1
                } else {
                    table[i][j + 1].max(table[i + 1][j])
                };
            }
        }
        table[a.len()][b.len()]
    }

    fn all_strings(alphabet: &[char], max_len: usize) -> Vec<String> {
        let mut out = vec![String::new()];
        let mut frontier = vec![String::new()];
        for _ in 0..max_len {
            let mut next = Vec::new();
            for prefix in &frontier {
                for ch in alphabet {
                    let mut s = prefix.clone();
                    s.push(*ch);
                    next.push(s);
                }
            }
            out.extend(next.iter().cloned());
            frontier = next;
        }
        out
    }

    #[test]
    fn test_equal_inputs_give_empty_script() {
        assert!(diff("", "").is_empty());
        assert!(diff("abc", "abc").is_empty());
        assert!(diff("日本語", "日本語").is_empty());
    }

    #[test]
    fn test_pure_insert_and_delete() {
        assert_eq!(ops("", "x"), vec![Insert("x".to_string())]);
        assert_eq!(ops("xyz", ""), vec![Delete(3)]);
        assert_eq!(
            ops("hello", "hello world"),
            vec![Copy(5), Insert(" world".to_string())]
        );
    }

    #[test]
    fn test_replacement_orders_delete_first() {
        assert_eq!(
            ops("abc", "axc"),
            vec![Copy(1), Delete(1), Insert("x".to_string()), Copy(1)]
        );
    }

    #[test]
    fn test_matches_leftmost_run() {
        assert_eq!(ops("aaa", "aa"), vec![Copy(2), Delete(1)]);
        assert_eq!(ops("abc", "abxabc"), vec![Copy(2), Insert("xab".to_string()), Copy(1)]);
    }

    #[test]
    fn test_char_offsets_for_multibyte_text() {
        assert_eq!(
            ops("你好世界", "你们好世界"),
            vec![Copy(1), Insert("们".to_string()), Copy(3)]
        );
    }

    #[test]
    fn test_deterministic() {
        let a = "the quick brown fox jumps over the lazy dog";
        let b = "the quack brown fax jumped over a lazy dog!";
        assert_eq!(diff(a, b), diff(a, b));
    }

    #[test]
    fn test_minimal_and_canonical_exhaustive() {
        let strings = all_strings(&['a', 'b', 'c'], 4);
        for a in &strings {
            for b in &strings {
                let script = diff(a, b);
                assert!(script.is_canonical(), "{a:?} -> {b:?}: {script:?}");
                if a == b {
                    assert!(script.is_empty());
                    continue;
                }
                assert_eq!(apply(a, &script).as_deref(), Ok(b.as_str()), "{a:?} -> {b:?}");

                let a_chars: Vec<char> = a.chars().collect();
                let b_chars: Vec<char> = b.chars().collect();
                let lcs = lcs_len(&a_chars, &b_chars);
                let deleted: usize = script
                    .iter()
                    .map(|op| match op {
                        Delete(n) => *n,
                        _ => 0,
                    })
                    .sum();
                let inserted: usize = script
                    .iter()
                    .map(|op| match op {
                        Insert(text) => text.chars().count(),
                        _ => 0,
                    })
                    .sum();
                assert_eq!(deleted, a_chars.len() - lcs, "{a:?} -> {b:?}");
                assert_eq!(inserted, b_chars.len() - lcs, "{a:?} -> {b:?}");
            }
        }
    }

    #[test]
    fn test_grapheme_granularity_keeps_clusters_whole() {
        let source = "cafe\u{301}";
        let target = "cafe\u{300}";

        assert_eq!(
            ops(source, target),
            vec![Copy(4), Delete(1), Insert("\u{300}".to_string())]
        );

        let options = DiffOptions::default().with_granularity(Granularity::Grapheme);
        let script = diff_with_options(source, target, &options);
        assert_eq!(
            script.operations(),
            &[Copy(3), Delete(2), Insert("e\u{300}".to_string())]
        );
        assert_eq!(apply(source, &script).as_deref(), Ok(target));
    }

    #[test]
    fn test_max_edit_cost_replaces_middle() {
        let options = DiffOptions::default().with_max_edit_cost(0);
        let script = diff_with_options("abcdef", "axcyef", &options);
        assert_eq!(
            script.operations(),
            &[Copy(1), Delete(3), Insert("xcy".to_string()), Copy(2)]
        );
        assert_eq!(apply("abcdef", &script).as_deref(), Ok("axcyef"));

        // A generous cap behaves like no cap.
        let options = DiffOptions::default().with_max_edit_cost(100);
        assert_eq!(
            diff_with_options("abcdef", "axcyef", &options),
            diff("abcdef", "axcyef")
        );
    }
}
