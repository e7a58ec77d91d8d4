//! String-building reducers

use crate::error::Result;
use crate::reducer::SequenceReducer;

/// Collects characters into a `String`.
///
/// Merging concatenates left then right, so sharded runs produce the same
/// text as a sequential one. An empty sequence yields `""`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharToString;

impl SequenceReducer<char> for CharToString {
    type Acc = String;
    type Output = String;

    fn supplier(&self) -> String {
        String::new()
    }

    fn accumulate(&self, acc: &mut String, element: char) -> Result<()> {
        acc.push(element);
        Ok(())
    }

    fn merge(&self, mut left: String, right: String) -> String {
        left.push_str(&right);
        left
    }

    fn finish(&self, acc: String) -> Result<String> {
        Ok(acc)
    }

    fn name(&self) -> &'static str {
        "chars-to-string"
    }
}

/// Joins string-like elements with a separator, wrapped in a prefix and
/// suffix. An empty sequence yields `prefix + suffix`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Joining {
    separator: String,
    prefix: String,
    suffix: String,
}

/// Accumulator for [`Joining`]
#[derive(Debug, Clone, Default)]
pub struct JoinBuffer {
    text: String,
    parts: usize,
}

impl JoinBuffer {
    /// Number of elements joined so far
    pub fn parts(&self) -> usize {
        self.parts
    }
}

impl Joining {
    /// Join with `separator` and no prefix or suffix
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            prefix: String::new(),
            suffix: String::new(),
        }
    }

    /// Join with `separator`, wrapping the whole result in `prefix` and `suffix`
    pub fn with_affixes(
        separator: impl Into<String>,
        prefix: impl Into<String>,
        suffix: impl Into<String>,
    ) -> Self {
        Self {
            separator: separator.into(),
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }
}

impl<S: AsRef<str>> SequenceReducer<S> for Joining {
    type Acc = JoinBuffer;
    type Output = String;

    fn supplier(&self) -> JoinBuffer {
        JoinBuffer::default()
    }

    fn accumulate(&self, acc: &mut JoinBuffer, element: S) -> Result<()> {
        if acc.parts > 0 {
            acc.text.push_str(&self.separator);
        }
        acc.text.push_str(element.as_ref());
        acc.parts += 1;
        Ok(())
    }

    fn merge(&self, mut left: JoinBuffer, right: JoinBuffer) -> JoinBuffer {
        if right.parts == 0 {
            return left;
        }
        if left.parts == 0 {
            return right;
        }
        left.text.push_str(&self.separator);
        left.text.push_str(&right.text);
        left.parts += right.parts;
        left
    }

    fn finish(&self, acc: JoinBuffer) -> Result<String> {
        let mut out =
            String::with_capacity(self.prefix.len() + acc.text.len() + self.suffix.len());
        out.push_str(&self.prefix);
        out.push_str(&acc.text);
        out.push_str(&self.suffix);
        Ok(out)
    }

    fn name(&self) -> &'static str {
        "joining"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducer::{reduce_all, Reduction};

    #[test]
    fn test_chars_to_string() {
        let result = reduce_all(&CharToString, "Hello".chars()).unwrap();
        assert_eq!(result, "Hello");
    }

    #[test]
    fn test_chars_to_string_multibyte() {
        let result = reduce_all(&CharToString, "こんにちは".chars()).unwrap();
        assert_eq!(result, "こんにちは");
    }

    #[test]
    fn test_joining_names() {
        let reducer = Joining::new(", ");
        let result = reduce_all(&reducer, vec!["Ann", "Bob", "Cid"]).unwrap();
        assert_eq!(result, "Ann, Bob, Cid");
    }

    #[test]
    fn test_joining_empty_keeps_affixes() {
        let reducer = Joining::with_affixes(", ", "[", "]");
        let result = reduce_all(&reducer, Vec::<String>::new()).unwrap();
        assert_eq!(result, "[]");
    }

    #[test]
    fn test_joining_merge_with_empty_shard() {
        let reducer = Joining::with_affixes("-", "<", ">");
        let left = Reduction::new(&reducer).extend(["a", "b"]).unwrap();
        let empty = Reduction::starting_at(&reducer, 2);
        let right = Reduction::starting_at(&reducer, 2).extend(["c"]).unwrap();

        let merged = left.merge(empty).merge(right);
        assert_eq!(merged.finish().unwrap(), "<a-b-c>");
    }

    #[test]
    fn test_joining_merge_into_empty_left() {
        let reducer = Joining::new("+");
        let empty = Reduction::new(&reducer);
        let right = Reduction::new(&reducer).extend(["x", "y"]).unwrap();
        assert_eq!(empty.merge(right).finish().unwrap(), "x+y");
    }
}
