/// Monotonic counter handed out alongside queued entries so that entries with
/// equal priority pop in the order they were created.
#[derive(Default, Debug)]
pub struct Sequence(u64);

impl Sequence {
    pub fn next_value(&mut self) -> u64 {
        let current = self.0;
        self.0 += 1;
        current
    }
}
