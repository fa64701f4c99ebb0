use time::OffsetDateTime;

pub trait ClockPort: Send + Sync {
    fn now(&self) -> OffsetDateTime;
}

#[derive(Debug, Default)]
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

#[derive(Debug)]
pub struct FixedClock {
    at: OffsetDateTime,
}

impl FixedClock {
    pub fn new(at: OffsetDateTime) -> Self {
        Self { at }
    }
}

impl ClockPort for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.at
    }
}
