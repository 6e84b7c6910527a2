/// Monotonic request sequencing for one fetch category.
///
/// Every fetch takes a number from [`SequenceGate::issue`] before it goes
/// out; its response is applied only if no later-issued response has been
/// applied already. This gives last-issued-wins between the poller and
/// on-demand refreshes.
#[derive(Debug, Default, Clone)]
pub struct SequenceGate {
    issued: u64,
    applied: u64,
}

impl SequenceGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Accept `seq` if it is newer than everything applied so far
    pub fn try_apply(&mut self, seq: u64) -> bool {
        if seq > self.applied {
            self.applied = seq;
            true
        } else {
            false
        }
    }

    /// Make every number issued so far stale
    pub fn invalidate(&mut self) {
        self.applied = self.issued;
    }

    pub fn last_applied(&self) -> u64 {
        self.applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_order_responses_apply() {
        let mut gate = SequenceGate::new();
        let a = gate.issue();
        let b = gate.issue();
        assert!(gate.try_apply(a));
        assert!(gate.try_apply(b));
        assert_eq!(gate.last_applied(), b);
    }

    #[test]
    fn test_older_response_is_discarded() {
        let mut gate = SequenceGate::new();
        let poll = gate.issue();
        let manual = gate.issue();
        assert!(gate.try_apply(manual));
        assert!(!gate.try_apply(poll));
    }

    #[test]
    fn test_same_sequence_applies_once() {
        let mut gate = SequenceGate::new();
        let seq = gate.issue();
        assert!(gate.try_apply(seq));
        assert!(!gate.try_apply(seq));
    }

    #[test]
    fn test_invalidate_drops_in_flight() {
        let mut gate = SequenceGate::new();
        let in_flight = gate.issue();
        gate.invalidate();
        assert!(!gate.try_apply(in_flight));

        let fresh = gate.issue();
        assert!(gate.try_apply(fresh));
    }
}
