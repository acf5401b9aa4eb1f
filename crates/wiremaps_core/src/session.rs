//! Request tagging for out-of-order network completions.
//!
//! Each channel carries a generation counter. A request is tagged with the generation current at
//! issue time; any later activation on the same channel bumps the counter, which turns every
//! outstanding tag on that channel stale.

/// Independent request streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestChannel {
    /// Requests scoped to the selected equipment (description, ports, details, refresh).
    Equipment,
    /// Search panel requests.
    Search,
}

/// Tag attached to a request at issue time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestTag {
    /// Channel the request belongs to.
    pub channel: RequestChannel,
    /// Channel generation at issue time.
    pub generation: u64,
    /// Target identifier (equipment IP or search text).
    pub target: String,
}

/// Current generation per channel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionTracker {
    equipment_generation: u64,
    search_generation: u64,
    active_equipment: Option<String>,
    active_search: Option<String>,
}

impl SessionTracker {
    /// Tracker with no active equipment or search.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `ip` the active equipment, invalidating every outstanding equipment request.
    pub fn activate_equipment(&mut self, ip: &str) -> RequestTag {
        self.equipment_generation += 1;
        self.active_equipment = Some(ip.to_string());
        self.tag(RequestChannel::Equipment, ip)
    }

    /// Tag for another request on the active equipment, without invalidating earlier ones.
    pub fn equipment_tag(&self) -> Option<RequestTag> {
        self.active_equipment
            .as_deref()
            .map(|ip| self.tag(RequestChannel::Equipment, ip))
    }

    /// Starts a search, invalidating any outstanding search.
    pub fn begin_search(&mut self, text: &str) -> RequestTag {
        self.search_generation += 1;
        self.active_search = Some(text.to_string());
        self.tag(RequestChannel::Search, text)
    }

    /// Forgets the active search so its pending results are dropped.
    pub fn end_search(&mut self) {
        self.search_generation += 1;
        self.active_search = None;
    }

    /// Whether a completion carrying `tag` still matches the session.
    pub fn is_current(&self, tag: &RequestTag) -> bool {
        let (generation, target) = match tag.channel {
            RequestChannel::Equipment => (self.equipment_generation, &self.active_equipment),
            RequestChannel::Search => (self.search_generation, &self.active_search),
        };
        tag.generation == generation && target.as_deref() == Some(tag.target.as_str())
    }

    /// Active equipment IP.
    pub fn active_equipment(&self) -> Option<&str> {
        self.active_equipment.as_deref()
    }

    /// Active search text.
    pub fn active_search(&self) -> Option<&str> {
        self.active_search.as_deref()
    }

    fn tag(&self, channel: RequestChannel, target: &str) -> RequestTag {
        let generation = match channel {
            RequestChannel::Equipment => self.equipment_generation,
            RequestChannel::Search => self.search_generation,
        };
        RequestTag {
            channel,
            generation,
            target: target.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selecting_another_equipment_invalidates_old_tags() {
        let mut session = SessionTracker::new();
        let first = session.activate_equipment("10.0.0.1");
        let detail = session.equipment_tag().expect("active equipment");
        assert!(session.is_current(&first));
        assert!(session.is_current(&detail));

        let second = session.activate_equipment("10.0.0.2");
        assert!(!session.is_current(&first));
        assert!(!session.is_current(&detail));
        assert!(session.is_current(&second));
    }

    #[test]
    fn reloading_the_same_equipment_still_invalidates() {
        let mut session = SessionTracker::new();
        let first = session.activate_equipment("10.0.0.1");
        session.activate_equipment("10.0.0.1");

        assert!(!session.is_current(&first));
    }

    #[test]
    fn channels_are_independent() {
        let mut session = SessionTracker::new();
        let equipment = session.activate_equipment("10.0.0.1");
        let search = session.begin_search("vlan 100");
        session.begin_search("vlan 200");

        assert!(session.is_current(&equipment));
        assert!(!session.is_current(&search));
        session.end_search();
        assert_eq!(session.active_search(), None);
    }
}
