use std::collections::HashMap;
use std::hash::Hash;

use crate::compute::WorkerPool;

pub mod tokenizer;
pub mod word_count;

// map stuff
pub type MapLikeFunc<I, P> = fn(input: I) -> P;
pub type MapStageOutput<P> = Vec<P>;

// for shuffle purpose
pub trait Keyable<K: Sized + Hash + Eq, V> {
    fn get_key(&self) -> K;
    fn get_value(&self) -> &V;
}

impl<K: Hash + Eq + Clone, V> Keyable<K, V> for (K, V) {
    fn get_key(&self) -> K {
        return self.0.clone();
    }

    fn get_value(&self) -> &V {
        return &self.1;
    }
}

// shuffle stuff: one entry per distinct key, in the order keys were first seen.
pub type ShuffleStageOutput<K, V> = Vec<(K, Vec<V>)>;

// reduce stuff
pub type ReduceLikeFunc<K, V> = fn(k: K, vs: Vec<V>) -> (K, V);
pub type ReduceStageOutput<K, V> = Vec<(K, V)>;


/// A map function and a reduce function, run as map (parallel), shuffle (sequential),
/// reduce (parallel) over a `WorkerPool`.
///
/// Each stage consumes the complete output of the previous one.
pub struct PipelineStage<I, P, K, V> {
    pub map_func: MapLikeFunc<I, P>,
    pub reduce_func: ReduceLikeFunc<K, V>,
}

impl<I, P, K, V> PipelineStage<I, P, K, V>
where
    I: Send,
    P: Keyable<K, V> + Send,
    K: Sized + Hash + Eq + Clone + Send,
    V: Clone + Send,
{

    pub fn new(map_func: MapLikeFunc<I, P>, reduce_func: ReduceLikeFunc<K, V>) -> Self {
        return PipelineStage { map_func, reduce_func };
    }

    pub fn apply_map(&self, pool: &WorkerPool, inputs: Vec<I>) -> MapStageOutput<P> {
        let f = self.map_func;
        return pool.par_map(inputs, f);
    }

    pub fn apply_shuffle(&self, map_outputs: MapStageOutput<P>) -> ShuffleStageOutput<K, V> {
        let mut k_to_group: HashMap<K, usize> = HashMap::new();
        let mut groups: ShuffleStageOutput<K, V> = Vec::new();
        for keyable in map_outputs.iter() {
            let k = keyable.get_key();
            let value = keyable.get_value().clone();
            match k_to_group.get(&k) {
                Some(&i) => groups[i].1.push(value),
                None => {
                    k_to_group.insert(k.clone(), groups.len());
                    groups.push((k, vec![value]));
                }
            }
        }
        return groups;
    }

    pub fn apply_reduce(&self, pool: &WorkerPool, grouped_by_key: ShuffleStageOutput<K, V>) -> ReduceStageOutput<K, V> {
        let f = self.reduce_func;
        return pool.par_map(grouped_by_key, |(k, vs)| f(k, vs));
    }

    pub fn run(&self, pool: &WorkerPool, inputs: Vec<I>) -> ReduceStageOutput<K, V> {
        let n_inputs = inputs.len();

        // 1. map
        let mapped = self.apply_map(pool, inputs);
        log::debug!("map stage: {} inputs -> {} pairs", n_inputs, mapped.len());

        // 2. shuffle
        let shuffled = self.apply_shuffle(mapped);
        log::debug!("shuffle stage: {} distinct keys", shuffled.len());

        // 3. reduce
        let reduced = self.apply_reduce(pool, shuffled);
        log::debug!("reduce stage: {} entries", reduced.len());

        return reduced;
    }
}
