/// Per-session counters of completed commands.
///
/// Tracks how often each command ran to completion:
///
/// - **Played**: pieces drawn from the supply for play
/// - **Reserved**: pieces moved from the supply onto the reserve
/// - **Recalled**: pieces taken back off the reserve
/// - **Front swaps** / **triple swaps**: completed exchanges
///
/// Rejected commands leave every counter unchanged, so the totals equal the
/// number of state changes the session has made.
///
/// # Example
///
/// ```
/// use stackris_engine::SessionStats;
///
/// let mut stats = SessionStats::new();
/// stats.record_play();
/// stats.record_front_swap();
///
/// assert_eq!(stats.played(), 1);
/// assert_eq!(stats.front_swaps(), 1);
/// assert_eq!(stats.total_commands(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct SessionStats {
    played: usize,
    reserved: usize,
    recalled: usize,
    front_swaps: usize,
    triple_swaps: usize,
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStats {
    /// Creates a statistics tracker with all counters at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            played: 0,
            reserved: 0,
            recalled: 0,
            front_swaps: 0,
            triple_swaps: 0,
        }
    }

    /// Returns the number of pieces drawn for play.
    #[must_use]
    pub const fn played(&self) -> usize {
        self.played
    }

    /// Returns the number of pieces moved onto the reserve.
    #[must_use]
    pub const fn reserved(&self) -> usize {
        self.reserved
    }

    /// Returns the number of pieces taken back off the reserve.
    #[must_use]
    pub const fn recalled(&self) -> usize {
        self.recalled
    }

    /// Returns the number of completed front/top swaps.
    #[must_use]
    pub const fn front_swaps(&self) -> usize {
        self.front_swaps
    }

    /// Returns the number of completed triple swaps.
    #[must_use]
    pub const fn triple_swaps(&self) -> usize {
        self.triple_swaps
    }

    /// Returns the total number of completed commands.
    #[must_use]
    pub const fn total_commands(&self) -> usize {
        self.played + self.reserved + self.recalled + self.front_swaps + self.triple_swaps
    }

    pub const fn record_play(&mut self) {
        self.played += 1;
    }

    pub const fn record_reserve(&mut self) {
        self.reserved += 1;
    }

    pub const fn record_recall(&mut self) {
        self.recalled += 1;
    }

    pub const fn record_front_swap(&mut self) {
        self.front_swaps += 1;
    }

    pub const fn record_triple_swap(&mut self) {
        self.triple_swaps += 1;
    }
}
