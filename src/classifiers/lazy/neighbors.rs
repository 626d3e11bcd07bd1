/// A stored example's distance to the query and its class.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Neighbor {
    pub distance: f64,
    pub class: usize,
}

/// Fixed number of slots holding the closest candidates offered so far.
///
/// Once full, a candidate only displaces the current farthest slot when it
/// is strictly closer, so among equidistant candidates the first offered
/// stays.
#[derive(Clone, Debug)]
pub struct NearestNeighbors {
    k: usize,
    slots: Vec<Neighbor>,
}

impl NearestNeighbors {
    pub fn new(k: usize) -> Self {
        Self {
            k,
            slots: Vec::with_capacity(k),
        }
    }

    pub fn offer(&mut self, distance: f64, class: usize) {
        if self.slots.len() < self.k {
            self.slots.push(Neighbor { distance, class });
            return;
        }
        if let Some(worst) = self.farthest()
            && distance < self.slots[worst].distance
        {
            self.slots[worst] = Neighbor { distance, class };
        }
    }

    /// Position of the farthest slot, first one on ties.
    fn farthest(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, n) in self.slots.iter().enumerate() {
            if best.is_none_or(|b| n.distance > self.slots[b].distance) {
                best = Some(i);
            }
        }
        best
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Neighbor> {
        self.slots.iter()
    }

    /// One vote per held neighbor.
    pub fn votes(&self, num_classes: usize) -> Vec<f64> {
        let mut votes = vec![0.0; num_classes];
        for n in &self.slots {
            if let Some(v) = votes.get_mut(n.class) {
                *v += 1.0;
            }
        }
        votes
    }
}
