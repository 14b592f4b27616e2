/// Master-detail selection state: at most one active contract at a time.
///
/// Every change of selection bumps a generation counter. A detail fetch
/// carries a `FetchTicket` stamped with the generation current at request
/// time; the response is committed into the ledger only if the ticket is
/// still current. A late response for a previous selection is discarded
/// instead of overwriting the ledger with the wrong contract's points.
#[derive(Debug, Default)]
pub struct SelectionHandler {
    selected: Option<i64>,
    generation: u64,
}

/// Proof of which selection a detail fetch was issued for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FetchTicket {
    pub contract_id: i64,
    generation: u64,
}

impl SelectionHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `contract_id` the active selection and hand out a ticket for the
    /// dependent detail fetch. Any ticket issued earlier becomes stale.
    pub fn select(&mut self, contract_id: i64) -> FetchTicket {
        self.generation += 1;
        self.selected = Some(contract_id);
        FetchTicket {
            contract_id,
            generation: self.generation,
        }
    }

    /// Drop the selection. Outstanding tickets become stale.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.selected = None;
    }

    pub fn selected(&self) -> Option<i64> {
        self.selected
    }

    /// Ticket for re-fetching the current selection, if any.
    pub fn ticket(&self) -> Option<FetchTicket> {
        self.selected.map(|contract_id| FetchTicket {
            contract_id,
            generation: self.generation,
        })
    }

    /// True while `ticket` still matches the active selection.
    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        self.generation == ticket.generation && self.selected == Some(ticket.contract_id)
    }
}
