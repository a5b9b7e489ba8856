/*! Batch planning

Words are sent to the oracle in contiguous chunks of at most `chunk_size` items.
A [BatchPlan] records, for each vocabulary profile, how its words were split.
!*/
use indexmap::IndexMap;
use log::info;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Split `items` into contiguous chunks of `size` items, the last one holding the remainder.
///
/// Concatenating the chunks yields `items` back.
pub fn chunk<T: Clone>(items: &[T], size: usize) -> Result<Vec<Vec<T>>, Error> {
    if size == 0 {
        return Err(Error::Config("chunk size must be positive".to_string()));
    }
    Ok(items.chunks(size).map(<[T]>::to_vec).collect())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilePlan {
    pub total_words: usize,
    pub num_batches: usize,
    pub batches: Vec<Vec<String>>,
}

impl ProfilePlan {
    pub fn new(words: &[String], size: usize) -> Result<Self, Error> {
        let batches = chunk(words, size)?;
        Ok(Self {
            total_words: words.len(),
            num_batches: batches.len(),
            batches,
        })
    }
}

/// Batches of every profile, keyed by profile name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BatchPlan(IndexMap<String, ProfilePlan>);

impl BatchPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plan `words` for `profile`, replacing any previous plan of that profile.
    pub fn add_profile(&mut self, profile: &str, words: &[String], size: usize) -> Result<(), Error> {
        let plan = ProfilePlan::new(words, size)?;
        info!(
            "[{}] {} words in {} batches",
            profile, plan.total_words, plan.num_batches
        );
        self.0.insert(profile.to_string(), plan);
        Ok(())
    }

    pub fn get(&self, profile: &str) -> Option<&ProfilePlan> {
        self.0.get(profile)
    }

    pub fn profiles(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_by_two() {
        let items = vec!["a", "b", "c", "d", "e"];
        let chunks = chunk(&items, 2).unwrap();
        assert_eq!(chunks, vec![vec!["a", "b"], vec!["c", "d"], vec!["e"]]);
    }

    #[test]
    fn lossless() {
        let items: Vec<usize> = (0..97).collect();
        for size in [1, 2, 7, 10, 30, 96, 97, 200] {
            let chunks = chunk(&items, size).unwrap();
            let (last, rest) = chunks.split_last().unwrap();
            assert!(rest.iter().all(|c| c.len() == size));
            assert!(!last.is_empty() && last.len() <= size);
            assert_eq!(chunks.concat(), items);
        }
    }

    #[test]
    fn empty_and_zero() {
        let items: Vec<u8> = Vec::new();
        assert!(chunk(&items, 3).unwrap().is_empty());
        assert!(chunk(&[1, 2], 0).is_err());
    }

    #[test]
    fn plan_file_shape() {
        let words: Vec<String> = (1..=31).map(|i| format!("w{}", i)).collect();
        let mut plan = BatchPlan::new();
        plan.add_profile("german_b2", &words, 30).unwrap();

        let v = serde_json::to_value(&plan).unwrap();
        assert_eq!(v["german_b2"]["total_words"], 31);
        assert_eq!(v["german_b2"]["num_batches"], 2);
        assert_eq!(v["german_b2"]["batches"][1], serde_json::json!(["w31"]));

        let back: BatchPlan = serde_json::from_value(v).unwrap();
        assert_eq!(back, plan);
    }
}
