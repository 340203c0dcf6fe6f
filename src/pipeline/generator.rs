use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crossbeam::channel::{bounded, Receiver, Sender};

/// Consumer side of a generator.
///
/// The stream never signals end-of-stream. A sender stays registered for as
/// long as the stream exists, so once the producer has sent its last value a
/// further [`recv`](Stream::recv) blocks forever instead of observing a
/// disconnect.
pub struct Stream {
    rx: Receiver<i32>,
    _never_closed: Sender<i32>,
}

impl Stream {
    /// Blocking receive of the next value.
    pub fn recv(&self) -> i32 {
        match self.rx.recv() {
            Ok(value) => value,
            // `_never_closed` keeps the channel connected.
            Err(_) => unreachable!("stream sender dropped while stream alive"),
        }
    }

    /// Receive with a deadline, for callers that cannot afford to stall.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<i32> {
        self.rx.recv_timeout(timeout).ok()
    }
}

/// Start a producer thread that sends `values` in order over a rendezvous
/// channel, pausing `delay` after every send.
///
/// The producer exits after the last pause without closing anything.
pub fn generate(values: Vec<i32>, delay: Duration) -> io::Result<Stream> {
    let (tx, rx) = bounded(0);
    let never_closed = tx.clone();

    thread::Builder::new()
        .name("generator".to_string())
        .spawn(move || {
            tracing::debug!(count = values.len(), "producer started");
            for value in values {
                if tx.send(value).is_err() {
                    break;
                }
                tracing::debug!(value, "sent");
                thread::sleep(delay);
            }
            tracing::debug!("producer finished without signalling end of stream");
        })?;

    Ok(Stream {
        rx,
        _never_closed: never_closed,
    })
}

/// Perform exactly `count` blocking receives, handing each value to `f`.
///
/// If `count` exceeds what the producer sends, this never returns.
pub fn consume_with<F>(stream: &Stream, count: usize, mut f: F)
where
    F: FnMut(i32),
{
    for i in 0..count {
        tracing::trace!(receive = i + 1, "waiting for value");
        f(stream.recv());
    }
}

/// Perform exactly `count` blocking receives, writing each value on its own
/// line.
pub fn consume(stream: &Stream, count: usize, out: &mut impl Write) -> io::Result<()> {
    let mut result = Ok(());
    consume_with(stream, count, |value| {
        if result.is_ok() {
            result = writeln!(out, "{}", value).and_then(|_| out.flush());
        }
    });
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam::channel::unbounded;

    const FAST: Duration = Duration::from_millis(5);

    #[test]
    fn test_receives_in_order() {
        let stream = generate(vec![1, 2, 3], FAST).unwrap();
        let mut seen = Vec::new();
        consume_with(&stream, 3, |v| seen.push(v));
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[test]
    fn test_fewer_receives_than_values() {
        let stream = generate(vec![10, 20, 30, 40], FAST).unwrap();
        let mut out = Vec::new();
        consume(&stream, 2, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "10\n20\n");
    }

    #[test]
    fn test_extra_receive_stalls() {
        let stream = generate(vec![1, 2, 3], FAST).unwrap();
        let (seen_tx, seen_rx) = unbounded();
        let (done_tx, done_rx) = unbounded::<()>();

        thread::spawn(move || {
            consume_with(&stream, 4, |v| seen_tx.send(v).unwrap());
            let _ = done_tx.send(());
        });

        let first_three: Vec<i32> = (0..3)
            .map(|_| seen_rx.recv_timeout(Duration::from_secs(5)).unwrap())
            .collect();
        assert_eq!(first_three, vec![1, 2, 3]);

        // The fourth receive has no sender that will ever satisfy it.
        assert!(done_rx.recv_timeout(Duration::from_millis(300)).is_err());
        assert!(seen_rx.try_recv().is_err());
    }

    #[test]
    fn test_recv_timeout_after_last_value() {
        let stream = generate(vec![7], FAST).unwrap();
        assert_eq!(stream.recv(), 7);
        assert_eq!(stream.recv_timeout(Duration::from_millis(100)), None);
    }

    #[test]
    fn test_empty_sequence_stalls_immediately() {
        let stream = generate(Vec::new(), FAST).unwrap();
        assert_eq!(stream.recv_timeout(Duration::from_millis(50)), None);
    }
}
