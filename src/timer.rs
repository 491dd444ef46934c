use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerEvent
{
    Tick(Duration),
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TimerState
{
    Idle,
    Running,
    Finished,
    Cancelled,
}

/// Countdown polled from the host loop. Ticks fire at start and every
/// `interval` while time remains, then `Finished` fires once.
pub struct CountdownTimer
{
    total: Duration,
    interval: Duration,
    started_at: Option<Instant>,
    next_tick: Duration,
    state: TimerState,
}

impl CountdownTimer
{
    pub fn new(total: Duration, interval: Duration) -> Self
    {
        Self {
            total,
            interval: interval.max(Duration::from_millis(1)),
            started_at: None,
            next_tick: Duration::ZERO,
            state: TimerState::Idle,
        }
    }

    pub fn start(&mut self, now: Instant)
    {
        self.started_at = Some(now);
        self.next_tick = Duration::ZERO;
        self.state = TimerState::Running;
    }

    pub fn cancel(&mut self)
    {
        if self.state == TimerState::Running {
            self.state = TimerState::Cancelled;
        }
    }

    pub fn is_running(&self) -> bool
    {
        self.state == TimerState::Running
    }

    pub fn poll(&mut self, now: Instant) -> Vec<TimerEvent>
    {
        let mut events = Vec::new();
        let Some(start) = self.started_at else {
            return events;
        };
        if self.state != TimerState::Running {
            return events;
        }

        let elapsed = now.saturating_duration_since(start);
        while self.next_tick <= elapsed && self.next_tick < self.total {
            events.push(TimerEvent::Tick(self.total - self.next_tick));
            self.next_tick += self.interval;
        }
        if elapsed >= self.total {
            events.push(TimerEvent::Finished);
            self.state = TimerState::Finished;
        }
        events
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    fn ten_seconds() -> CountdownTimer
    {
        CountdownTimer::new(Duration::from_secs(10), Duration::from_secs(1))
    }

    #[test]
    fn idle_timer_is_silent()
    {
        let mut timer = ten_seconds();
        assert!(timer.poll(Instant::now()).is_empty());
        assert!(!timer.is_running());
    }

    #[test]
    fn ticks_once_per_second_then_finishes()
    {
        let start = Instant::now();
        let mut timer = ten_seconds();
        timer.start(start);

        let mut seen = Vec::new();
        for sec in 0..=10 {
            seen.extend(timer.poll(start + Duration::from_secs(sec)));
        }

        let mut expected: Vec<TimerEvent> = (1..=10)
            .rev()
            .map(|s| TimerEvent::Tick(Duration::from_secs(s)))
            .collect();
        expected.push(TimerEvent::Finished);
        assert_eq!(seen, expected);
        assert!(!timer.is_running());
        assert!(timer.poll(start + Duration::from_secs(20)).is_empty());
    }

    #[test]
    fn late_poll_catches_up_in_order()
    {
        let start = Instant::now();
        let mut timer = ten_seconds();
        timer.start(start);
        let events = timer.poll(start + Duration::from_millis(2_500));
        assert_eq!(
            events,
            vec![
                TimerEvent::Tick(Duration::from_secs(10)),
                TimerEvent::Tick(Duration::from_secs(9)),
                TimerEvent::Tick(Duration::from_secs(8)),
            ]
        );
    }

    #[test]
    fn cancelled_timer_stops_firing()
    {
        let start = Instant::now();
        let mut timer = ten_seconds();
        timer.start(start);
        timer.poll(start);
        timer.cancel();
        assert!(!timer.is_running());
        assert!(timer.poll(start + Duration::from_secs(30)).is_empty());
    }
}
