/// Pending approvals
///
/// In-memory list seeded with demo items. Newly synthesized items get ids
/// from a counter that starts above every seeded id, so ids never repeat.

use std::collections::HashSet;

/// One item waiting for the user's decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApprovalItem {
    pub id: u64,
    pub title: String,
    pub summary: String,
    pub date: String,
}

impl ApprovalItem {
    pub fn new(
        id: u64,
        title: impl Into<String>,
        summary: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            summary: summary.into(),
            date: date.into(),
        }
    }
}

/// The demo queue, newest first
pub fn seed_items() -> Vec<ApprovalItem> {
    vec![
        ApprovalItem::new(1, "Contract Renewal: Acme Corp", "Updated terms for 2026. Rate adjustment +5%.", "2h ago"),
        ApprovalItem::new(2, "New Hire: Sarah Jones", "Offer letter generated. Standard Senior Dev package.", "3h ago"),
        ApprovalItem::new(3, "Expense Report: Q4 Team Offsite", "Total: $4,200. Exceeds budget by 5%.", "5h ago"),
        ApprovalItem::new(4, "Policy Update: Remote Work", "Tier 2 grammatical corrections applied.", "1d ago"),
        ApprovalItem::new(5, "Vendor Agreement: CloudSaaS", "Annual license renewal. No price change.", "1d ago"),
        ApprovalItem::new(6, "Time Off Request: Michael Scott", "3 days PTO for family event.", "2d ago"),
        ApprovalItem::new(7, "Access Request: JIRA Admin", "Granted temporary admin rights for migration.", "2d ago"),
        ApprovalItem::new(8, "Invoice Approval: AWS Feb", "Usage within aligned forecast.", "3d ago"),
        ApprovalItem::new(9, "Compliance Training: Q1", "Assigning mandatory training to all employees.", "3d ago"),
        ApprovalItem::new(10, "Equipment Request: Monitor", "Replacement 4K monitor for Design team.", "4d ago"),
    ]
}

/// Ordered approval queue with removal marks
#[derive(Debug, Clone)]
pub struct ApprovalList {
    items: Vec<ApprovalItem>,
    /// Items playing their removal animation
    removing: HashSet<u64>,
    next_id: u64,
}

impl ApprovalList {
    pub fn new(items: Vec<ApprovalItem>) -> Self {
        let next_id = items.iter().map(|item| item.id).max().unwrap_or(0) + 1;
        Self {
            items,
            removing: HashSet::new(),
            next_id,
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed_items())
    }

    pub fn items(&self) -> &[ApprovalItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&ApprovalItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// First `cap` items, or all of them when uncapped
    pub fn visible(&self, cap: Option<usize>) -> &[ApprovalItem] {
        let end = cap.map_or(self.items.len(), |cap| cap.min(self.items.len()));
        &self.items[..end]
    }

    pub fn is_removing(&self, id: u64) -> bool {
        self.removing.contains(&id)
    }

    /// Start the removal animation. Returns false for unknown or already
    /// removing items.
    pub fn mark_removing(&mut self, id: u64) -> bool {
        self.get(id).is_some() && self.removing.insert(id)
    }

    /// Drop an item from the list
    pub fn remove(&mut self, id: u64) -> Option<ApprovalItem> {
        self.removing.remove(&id);
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    /// Put a new item at the top, returning its id
    pub fn prepend(
        &mut self,
        title: impl Into<String>,
        summary: impl Into<String>,
        date: impl Into<String>,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.insert(0, ApprovalItem::new(id, title, summary, date));
        id
    }
}

impl Default for ApprovalList {
    fn default() -> Self {
        Self::seeded()
    }
}
