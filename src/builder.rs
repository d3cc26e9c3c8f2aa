use crate::error::InvalidInput;
use crate::instance::KnapsackInstance;

pub struct KnapsackInstanceBuilder {
    values: Vec<f64>,
    weights: Vec<u32>,
    capacity: Option<u32>,
}

impl KnapsackInstanceBuilder {
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            weights: Vec::new(),
            capacity: None,
        }
    }

    pub fn item(mut self, value: f64, weight: u32) -> Self {
        self.values.push(value);
        self.weights.push(weight);
        self
    }

    pub fn items<I>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = (f64, u32)>,
    {
        for (value, weight) in items {
            self.values.push(value);
            self.weights.push(weight);
        }
        self
    }

    pub fn capacity(mut self, capacity: u32) -> Self {
        self.capacity = Some(capacity);
        self
    }

    pub fn build(self) -> Result<KnapsackInstance, InvalidInput> {
        KnapsackInstance::new(self.values, self.weights, self.capacity.unwrap_or(0))
    }
}

impl Default for KnapsackInstanceBuilder {
    fn default() -> Self {
        Self::new()
    }
}
