//! The self describing frame that is spread over the pixel pair sequence.
//!
//! ```text
//! | header (16 bit) | length (16 bit, big-endian) | payload (length bits) |
//! ```
//!
//! The header is a fixed pattern. On decode it is accepted with up to four
//! flipped bits, and when it is not found at the start of the sequence a
//! bounded search slides over the following pairs. Everything after a valid
//! header is best effort: implausible lengths fall back to a bounded
//! estimate, and the `START`/`END` markers around the message decide what
//! text is handed back.

use log::{debug, trace};

use super::bits::{bits_to_bytes, bits_to_value, to_bit_text, value_to_bits, BitString};
use super::pair_codec::{embed, extract};
use super::range_table::classify;
use super::sequencer::PixelPair;
use crate::media::image::{PairSink, PairSource};
use crate::progress::ProgressTracker;
use crate::{GeoStegoError, Result};

pub const FRAME_HEADER: u16 = 0b1010_1010_1010_1010;
pub const HEADER_BITS: usize = 16;
pub const LENGTH_BITS: usize = 16;
pub const FRAME_PREFIX_BITS: usize = HEADER_BITS + LENGTH_BITS;
/// a header with at least this many matching bits (75%) is accepted
pub const HEADER_MATCH_THRESHOLD: usize = 12;
/// payload lengths above are considered implausible on decode
pub const MAX_PAYLOAD_BITS: usize = 50_000;
/// upper bound of payload bits read when the length field is implausible
pub const FALLBACK_PAYLOAD_BITS: usize = 2_000;
/// pairs probed after the first header window before giving up
pub const EXTENDED_SEARCH_PAIRS: usize = 100;
/// pairs sampled for the capacity estimate
pub const CAPACITY_SAMPLE_PAIRS: usize = 100;
/// share of the estimated capacity a frame may occupy
pub const CAPACITY_SAFETY_FACTOR: f64 = 0.9;

pub const START_MARKER: &str = "START";
pub const END_MARKER: &str = "END";
/// salvaged runs must be longer than this to be preferred over the cleaned text
const SALVAGE_MIN_RUN: usize = 5;
const SALVAGE_MAX_CHARS: usize = 500;

pub fn header_bits() -> BitString {
    value_to_bits(FRAME_HEADER, HEADER_BITS)
}

/// `START` + message + `END` as big-endian bits
///
/// Only printable ASCII is accepted, decode drops every other byte.
pub fn payload_bits(message: &str) -> Result<BitString> {
    if !message.bytes().all(|b| (32..=126).contains(&b)) {
        return Err(GeoStegoError::NonAsciiMessage);
    }
    let framed = format!("{START_MARKER}{message}{END_MARKER}");

    Ok(super::bits::bytes_to_bits(framed.as_bytes())?)
}

/// header ∥ length ∥ payload
pub fn build_frame(header: &[bool], payload: &[bool]) -> Result<BitString> {
    if payload.len() > MAX_PAYLOAD_BITS {
        return Err(GeoStegoError::CapacityExceeded {
            estimated_chars: chars_for_payload_bits(MAX_PAYLOAD_BITS),
        });
    }

    let mut frame = Vec::with_capacity(FRAME_PREFIX_BITS + payload.len());
    frame.extend_from_slice(header);
    frame.extend(value_to_bits(payload.len() as u16, LENGTH_BITS));
    frame.extend_from_slice(payload);

    Ok(frame)
}

/// Estimates the bits the whole sequence can carry from its first pairs.
pub fn estimate_capacity_bits(pairs: &[PixelPair], source: &impl PairSource) -> usize {
    let sample_size = pairs.len().min(CAPACITY_SAMPLE_PAIRS);
    if sample_size == 0 {
        return 0;
    }
    let sampled: usize = pairs[..sample_size]
        .iter()
        .map(|pair| {
            let (p1, p2) = source.read_pair(pair);
            classify(i16::from(p1) - i16::from(p2)).capacity
        })
        .sum();

    sampled * pairs.len() / sample_size
}

/// Message characters that fit into an estimated capacity, markers and frame prefix excluded.
pub fn estimated_chars(capacity_bits: usize) -> usize {
    let usable = (capacity_bits as f64 * CAPACITY_SAFETY_FACTOR) as usize;
    chars_for_payload_bits(usable.saturating_sub(FRAME_PREFIX_BITS).min(MAX_PAYLOAD_BITS))
}

fn chars_for_payload_bits(bits: usize) -> usize {
    (bits / 8).saturating_sub(START_MARKER.len() + END_MARKER.len())
}

/// Spreads a frame over the pair sequence, pair after pair.
pub(crate) fn embed_frame(
    pairs: &[PixelPair],
    buffer: &mut impl PairSink,
    frame: &[bool],
    tracker: &mut ProgressTracker<'_>,
) -> Result<()> {
    let estimate = estimate_capacity_bits(pairs, &*buffer);
    debug!(
        "frame of {} bits, estimated capacity {estimate} bits over {} pairs",
        frame.len(),
        pairs.len()
    );
    if frame.len() as f64 > CAPACITY_SAFETY_FACTOR * estimate as f64 {
        return Err(GeoStegoError::CapacityExceeded {
            estimated_chars: estimated_chars(estimate),
        });
    }

    let mut offset = 0;
    for pair in pairs {
        if offset >= frame.len() {
            break;
        }
        let (p1, p2) = buffer.read_pair(pair);
        let tier = classify(i16::from(p1) - i16::from(p2));

        let end = (offset + tier.capacity).min(frame.len());
        let mut chunk = frame[offset..end].to_vec();
        chunk.resize(tier.capacity, false);

        buffer.write_pair(pair, embed(p1, p2, &chunk, tier)?);
        offset += tier.capacity;
        tracker.pair_done(offset.min(frame.len()), frame.len())?;
    }

    if offset < frame.len() {
        let unembedded_bits = frame.len() - offset;
        debug!("pairs exhausted, {unembedded_bits} bits left over");
        return Err(GeoStegoError::PartialEmbed { unembedded_bits });
    }
    tracker.finish();

    Ok(())
}

/// Runs the decode state machine, an empty string means no message was found.
pub(crate) fn extract_frame(
    pairs: &[PixelPair],
    source: &impl PairSource,
    tracker: &mut ProgressTracker<'_>,
) -> Result<String> {
    let mut reader = FrameReader {
        pairs,
        source,
        tracker,
        cursor: 0,
        bits: Vec::new(),
        expected_bits: FRAME_PREFIX_BITS,
    };
    let mut state = DecodeState::ExtractHeaderLen;

    let message = loop {
        state = match state {
            DecodeState::ExtractHeaderLen => {
                reader.fill_to(FRAME_PREFIX_BITS)?;
                if reader.bits.len() < FRAME_PREFIX_BITS {
                    debug!("not even a frame prefix fits into {} pairs", pairs.len());
                    DecodeState::Done(String::new())
                } else {
                    DecodeState::ValidateHeader
                }
            }
            DecodeState::ValidateHeader => {
                let matching = header_matches(&reader.bits[..HEADER_BITS]);
                debug!("header matches {matching}/{HEADER_BITS} bits at the start");
                if matching >= HEADER_MATCH_THRESHOLD {
                    DecodeState::ExtractPayload { frame_start: 0 }
                } else {
                    DecodeState::ExtendedSearch
                }
            }
            DecodeState::ExtendedSearch => match reader.search_header()? {
                Some(frame_start) => {
                    debug!("header found at bit {frame_start} by extended search");
                    DecodeState::ExtractPayload { frame_start }
                }
                None => {
                    debug!("no header within {EXTENDED_SEARCH_PAIRS} additional pairs");
                    DecodeState::Done(String::new())
                }
            },
            DecodeState::ExtractPayload { frame_start } => {
                let payload = reader.read_payload(frame_start)?;
                DecodeState::MarkerScan(printable_text(&bits_to_bytes(&payload)?))
            }
            DecodeState::MarkerScan(text) => DecodeState::Done(scan_markers(&text)),
            DecodeState::Done(message) => break message,
        };
    };
    reader.tracker.finish();

    Ok(message)
}

enum DecodeState {
    ExtractHeaderLen,
    ValidateHeader,
    ExtendedSearch,
    ExtractPayload { frame_start: usize },
    MarkerScan(String),
    Done(String),
}

/// pulls bits pair by pair from the sequence
struct FrameReader<'a, 't, 'p, S> {
    pairs: &'a [PixelPair],
    source: &'a S,
    tracker: &'t mut ProgressTracker<'p>,
    cursor: usize,
    bits: BitString,
    expected_bits: usize,
}

impl<S: PairSource> FrameReader<'_, '_, '_, S> {
    /// extracts the next pair, `None` once the sequence is exhausted
    fn pull(&mut self) -> Result<Option<usize>> {
        let Some(pair) = self.pairs.get(self.cursor) else {
            return Ok(None);
        };
        self.cursor += 1;

        let (p1, p2) = self.source.read_pair(pair);
        let chunk = extract(p1, p2);
        let width = chunk.len();
        self.bits.extend(chunk);
        self.tracker.pair_done(self.bits.len(), self.expected_bits)?;

        Ok(Some(width))
    }

    fn fill_to(&mut self, bit_count: usize) -> Result<()> {
        while self.bits.len() < bit_count {
            if self.pull()?.is_none() {
                break;
            }
        }
        Ok(())
    }

    /// slides the header window by the width of every newly extracted pair
    fn search_header(&mut self) -> Result<Option<usize>> {
        let average = self.bits.len() / self.cursor.max(1);
        self.expected_bits = self.bits.len() + EXTENDED_SEARCH_PAIRS * average;
        let mut window = 0;
        for _ in 0..EXTENDED_SEARCH_PAIRS {
            let Some(width) = self.pull()? else {
                break;
            };
            window += width;

            let matching = header_matches(&self.bits[window..window + HEADER_BITS]);
            trace!("probe at bit {window}: {matching}/{HEADER_BITS}");
            if matching >= HEADER_MATCH_THRESHOLD {
                return Ok(Some(window));
            }
        }

        Ok(None)
    }

    fn read_payload(&mut self, frame_start: usize) -> Result<BitString> {
        let length_start = frame_start + HEADER_BITS;
        let payload_start = frame_start + FRAME_PREFIX_BITS;
        let declared = bits_to_value(&self.bits[length_start..payload_start]) as usize;

        let length = if declared == 0 || declared > MAX_PAYLOAD_BITS {
            let fallback = self.remaining_capacity(payload_start).min(FALLBACK_PAYLOAD_BITS);
            debug!(
                "implausible length field {} ({declared}), reading {fallback} bits instead",
                to_bit_text(&self.bits[length_start..payload_start])
            );
            fallback
        } else {
            declared
        };

        self.expected_bits = payload_start + length;
        self.fill_to(payload_start + length)?;
        let end = self.bits.len().min(payload_start + length);
        if end < payload_start + length {
            debug!(
                "pairs exhausted, payload truncated to {} of {length} bits",
                end - payload_start
            );
        }

        Ok(self.bits[payload_start..end].to_vec())
    }

    /// bits already read past `from` plus the remaining pairs at the average width seen so far
    fn remaining_capacity(&self, from: usize) -> usize {
        let average = self.bits.len() / self.cursor.max(1);
        let remaining_pairs = self.pairs.len() - self.cursor;

        self.bits.len().saturating_sub(from) + remaining_pairs * average
    }
}

fn header_matches(window: &[bool]) -> usize {
    window
        .iter()
        .zip(header_bits())
        .filter(|(found, expected)| **found == *expected)
        .count()
}

/// keeps printable ASCII `[32,126]`, everything else is dropped
fn printable_text(bytes: &[u8]) -> String {
    bytes
        .iter()
        .filter(|b| (32..=126).contains(*b))
        .map(|b| char::from(*b))
        .collect()
}

/// Picks the message out of the decoded text.
///
/// `START…END` yields the text in between, the last `END` wins so messages
/// may contain the word themselves. Without an `END` the text after `START`
/// is salvaged. Text without a `START` marker is not considered a message.
pub fn scan_markers(text: &str) -> String {
    let Some(start) = text.find(START_MARKER) else {
        return String::new();
    };
    let body = &text[start + START_MARKER.len()..];
    if let Some(end) = body.rfind(END_MARKER) {
        return body[..end].to_string();
    }

    salvage(body)
}

fn salvage(text: &str) -> String {
    let cleaned: String = text.chars().filter(|c| (' '..='~').contains(c)).collect();

    let longest_run = cleaned
        .split(|c: char| !is_plausible(c))
        .max_by_key(|run| run.len())
        .unwrap_or_default();
    if longest_run.len() > SALVAGE_MIN_RUN {
        return longest_run.to_string();
    }

    cleaned.chars().take(SALVAGE_MAX_CHARS).collect()
}

fn is_plausible(c: char) -> bool {
    c.is_ascii_alphanumeric() || c.is_ascii_whitespace() || ".,;:!?'\"-()".contains(c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::image::{PixelBuffer, PixelView};
    use crate::media::CarrierChannel;
    use crate::progress::NoProgress;
    use crate::pvd::sequencer::{generate, PixelPairSequence};
    use image::RgbaImage;

    fn gray(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_pixel(width, height, image::Rgba([128, 128, 128, 255]))
    }

    fn hide(image: &mut RgbaImage, message: &str, key: &str) -> Result<()> {
        let pairs = generate(key, image.width(), image.height())?;
        let frame = build_frame(&header_bits(), &payload_bits(message)?)?;
        let mut progress = NoProgress;
        let mut tracker = ProgressTracker::new(&mut progress, 50);
        embed_frame(
            &pairs,
            &mut PixelBuffer::new(image, CarrierChannel::Blue),
            &frame,
            &mut tracker,
        )
    }

    fn unveil(image: &RgbaImage, key: &str) -> String {
        let pairs = generate(key, image.width(), image.height()).unwrap();
        let mut progress = NoProgress;
        let mut tracker = ProgressTracker::new(&mut progress, 50);
        extract_frame(
            &pairs,
            &PixelView::new(image, CarrierChannel::Blue),
            &mut tracker,
        )
        .unwrap()
    }

    fn embed_at(image: &mut RgbaImage, pairs: &[PixelPair], frame: &[bool]) {
        let mut progress = NoProgress;
        let mut tracker = ProgressTracker::new(&mut progress, 50);
        embed_frame(
            pairs,
            &mut PixelBuffer::new(image, CarrierChannel::Blue),
            frame,
            &mut tracker,
        )
        .unwrap();
    }

    /// a frame for "declared" whose length field says `declared`
    fn frame_declaring(declared: u16) -> (RgbaImage, PixelPairSequence) {
        let pairs = generate("declared", 200, 200).unwrap();
        let mut img = gray(200, 200);
        let mut frame = build_frame(&header_bits(), &payload_bits("declared").unwrap()).unwrap();
        frame.splice(
            HEADER_BITS..FRAME_PREFIX_BITS,
            value_to_bits(declared, LENGTH_BITS),
        );
        embed_at(&mut img, &pairs, &frame);

        (img, pairs)
    }

    /// payload bits read after a frame prefix at the very start
    fn payload_bits_read(image: &RgbaImage, pairs: &[PixelPair]) -> usize {
        let view = PixelView::new(image, CarrierChannel::Blue);
        let mut progress = NoProgress;
        let mut tracker = ProgressTracker::new(&mut progress, 50);
        let mut reader = FrameReader {
            pairs,
            source: &view,
            tracker: &mut tracker,
            cursor: 0,
            bits: Vec::new(),
            expected_bits: FRAME_PREFIX_BITS,
        };
        reader.fill_to(FRAME_PREFIX_BITS).unwrap();

        reader.read_payload(0).unwrap().len()
    }

    #[test]
    fn should_lay_out_header_length_and_payload() {
        let payload = payload_bits("hi").unwrap();
        let frame = build_frame(&header_bits(), &payload).unwrap();

        assert_eq!(to_bit_text(&frame[..16]), "1010101010101010");
        assert_eq!(to_bit_text(&frame[16..32]), "0000000001010000");
        assert_eq!(frame.len(), 32 + 80);
        assert_eq!(bits_to_bytes(&frame[32..]).unwrap(), b"STARThiEND".to_vec());
    }

    #[test]
    fn should_reject_non_ascii_messages() {
        assert!(matches!(
            payload_bits("grüße"),
            Err(GeoStegoError::NonAsciiMessage)
        ));
    }

    #[test]
    fn should_reject_control_characters() {
        assert!(matches!(
            payload_bits("line1\nline2\ttab"),
            Err(GeoStegoError::NonAsciiMessage)
        ));
        assert!(payload_bits(" ~printable~ ").is_ok());
    }

    #[test]
    fn should_reject_payloads_beyond_the_length_limit() {
        let payload = vec![false; MAX_PAYLOAD_BITS + 8];
        assert!(matches!(
            build_frame(&header_bits(), &payload),
            Err(GeoStegoError::CapacityExceeded { .. })
        ));
    }

    #[test]
    fn should_estimate_capacity_of_a_flat_image() {
        let img = gray(200, 200);
        let pairs = generate("OFFICE42", 200, 200).unwrap();
        let estimate = estimate_capacity_bits(&pairs, &PixelView::new(&img, CarrierChannel::Blue));

        assert_eq!(estimate, 30_000);
        // 0.9 * 30000 = 27000, minus the prefix, in bytes, minus the markers
        assert_eq!(estimated_chars(estimate), (27_000 - 32) / 8 - 8);
    }

    #[test]
    fn should_round_trip_a_frame() {
        let mut img = gray(200, 200);
        hide(&mut img, "hi", "OFFICE42").unwrap();

        assert_eq!(unveil(&img, "OFFICE42"), "hi");
    }

    #[test]
    fn should_find_nothing_in_an_untouched_image() {
        assert_eq!(unveil(&gray(120, 120), "OFFICE42"), "");
    }

    #[test]
    fn should_find_a_header_that_starts_later_in_the_sequence() {
        let pairs = generate("shifted", 200, 200).unwrap();
        let mut img = gray(200, 200);
        let frame = build_frame(&header_bits(), &payload_bits("found me").unwrap()).unwrap();
        let mut progress = NoProgress;
        let mut tracker = ProgressTracker::new(&mut progress, 50);

        // the first pair keeps carrying zeros, the frame starts at bit 3
        embed_frame(
            &pairs[1..],
            &mut PixelBuffer::new(&mut img, CarrierChannel::Blue),
            &frame,
            &mut tracker,
        )
        .unwrap();

        assert_eq!(unveil(&img, "shifted"), "found me");
    }

    #[test]
    fn should_accept_a_header_with_a_few_flipped_bits() {
        let pairs = generate("noisy", 200, 200).unwrap();
        let mut img = gray(200, 200);
        let mut frame = build_frame(&header_bits(), &payload_bits("still here").unwrap()).unwrap();
        for i in [0, 5, 9] {
            frame[i] = !frame[i];
        }
        let mut progress = NoProgress;
        let mut tracker = ProgressTracker::new(&mut progress, 50);
        embed_frame(
            &pairs,
            &mut PixelBuffer::new(&mut img, CarrierChannel::Blue),
            &frame,
            &mut tracker,
        )
        .unwrap();

        assert_eq!(unveil(&img, "noisy"), "still here");
    }

    #[test]
    fn should_fall_back_when_the_length_field_is_implausible() {
        let pairs = generate("length", 200, 200).unwrap();
        let mut img = gray(200, 200);
        let mut frame = build_frame(&header_bits(), &payload_bits("length lost").unwrap()).unwrap();
        // declared length 0
        for bit in frame[16..32].iter_mut() {
            *bit = false;
        }
        let mut progress = NoProgress;
        let mut tracker = ProgressTracker::new(&mut progress, 50);
        embed_frame(
            &pairs,
            &mut PixelBuffer::new(&mut img, CarrierChannel::Blue),
            &frame,
            &mut tracker,
        )
        .unwrap();

        assert_eq!(unveil(&img, "length"), "length lost");
    }

    #[test]
    fn should_read_at_most_2000_bits_when_the_length_exceeds_the_limit() {
        let (img, pairs) = frame_declaring(50_001);

        assert_eq!(payload_bits_read(&img, &pairs), FALLBACK_PAYLOAD_BITS);
        assert_eq!(unveil(&img, "declared"), "declared");
    }

    #[test]
    fn should_take_a_length_of_exactly_50000_as_declared() {
        let (img, pairs) = frame_declaring(50_000);

        // 10000 pairs of 3 bits run out first, all bits after the prefix are read
        assert_eq!(payload_bits_read(&img, &pairs), 30_000 - FRAME_PREFIX_BITS);
        assert_eq!(unveil(&img, "declared"), "declared");
    }

    #[test]
    fn should_lock_onto_an_early_window_when_the_frame_starts_late() {
        let pairs = generate("late", 200, 200).unwrap();
        let mut img = gray(200, 200);
        let frame = build_frame(&header_bits(), &payload_bits("late start").unwrap()).unwrap();
        // the frame starts at bit 180, six zero bits before it the window
        // still matches 13 of the 16 header bits
        embed_at(&mut img, &pairs[60..], &frame);

        let view = PixelView::new(&img, CarrierChannel::Blue);
        let mut progress = NoProgress;
        let mut tracker = ProgressTracker::new(&mut progress, 50);
        let mut reader = FrameReader {
            pairs: &pairs,
            source: &view,
            tracker: &mut tracker,
            cursor: 0,
            bits: Vec::new(),
            expected_bits: FRAME_PREFIX_BITS,
        };
        reader.fill_to(FRAME_PREFIX_BITS).unwrap();

        assert_eq!(reader.search_header().unwrap(), Some(174));
        assert_eq!(unveil(&img, "late"), "");
    }

    #[test]
    fn should_fail_when_the_frame_exceeds_the_estimate() {
        let mut img = gray(100, 100);
        // 2500 pairs of 3 bits, 90% of it are 6750 bits
        let message = "x".repeat(900);

        assert!(matches!(
            hide(&mut img, &message, "k"),
            Err(GeoStegoError::CapacityExceeded { estimated_chars: 831 })
        ));
        assert_eq!(img, gray(100, 100), "image must stay untouched");
    }

    #[test]
    fn should_report_partial_embeds() {
        // the sampled first row of cells has high contrast, the rest is flat,
        // so the estimate promises far more than the sequence can carry
        let mut img = RgbaImage::from_fn(200, 200, |x, y| match (y < 2, x % 2) {
            (true, 0) => image::Rgba([0, 0, 100, 255]),
            (true, _) => image::Rgba([0, 0, 190, 255]),
            _ => image::Rgba([128, 128, 128, 255]),
        });
        let pairs = generate("partial", 200, 200).unwrap();
        let mut progress = NoProgress;
        let mut tracker = ProgressTracker::new(&mut progress, 50);

        // 100 pairs of 6 bits plus 9900 pairs of 3 bits
        let result = embed_frame(
            &pairs,
            &mut PixelBuffer::new(&mut img, CarrierChannel::Blue),
            &vec![true; 35_000],
            &mut tracker,
        );
        assert!(matches!(
            result,
            Err(GeoStegoError::PartialEmbed {
                unembedded_bits: 4_700
            })
        ));
    }

    #[test]
    fn should_report_progress_up_to_100() {
        let mut img = gray(200, 200);
        let pairs = generate("progress", 200, 200).unwrap();
        let frame = build_frame(&header_bits(), &payload_bits(&"p".repeat(200)).unwrap()).unwrap();
        let mut reports = Vec::new();
        {
            let mut sink = |p: u8| reports.push(p);
            let mut tracker = ProgressTracker::new(&mut sink, 50);
            embed_frame(
                &pairs,
                &mut PixelBuffer::new(&mut img, CarrierChannel::Blue),
                &frame,
                &mut tracker,
            )
            .unwrap();
        }

        assert_eq!(reports.last(), Some(&100));
        assert!(reports.len() > 2);
        assert!(reports.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn should_never_report_less_progress_after_a_late_header() {
        let pairs = generate("late", 200, 200).unwrap();
        let mut img = gray(200, 200);
        let frame = build_frame(&header_bits(), &payload_bits("late start").unwrap()).unwrap();
        embed_at(&mut img, &pairs[60..], &frame);

        let mut reports = Vec::new();
        {
            let mut sink = |p: u8| reports.push(p);
            let mut tracker = ProgressTracker::new(&mut sink, 50);
            extract_frame(
                &pairs,
                &PixelView::new(&img, CarrierChannel::Blue),
                &mut tracker,
            )
            .unwrap();
        }

        // the search reports against its own budget instead of the prefix
        assert!(reports[0] < 99, "{reports:?}");
        assert!(reports.windows(2).all(|w| w[0] <= w[1]), "{reports:?}");
        assert_eq!(reports.last(), Some(&100));
    }

    #[test]
    fn should_scan_markers() {
        assert_eq!(scan_markers("xxSTARThelloENDyy"), "hello");
        assert_eq!(scan_markers("STARTthe END is nearEND"), "the END is near");
        assert_eq!(scan_markers("STARTEND"), "");
        assert_eq!(scan_markers("helloEND"), "");
        assert_eq!(scan_markers("ENDxSTARTabc"), "abc");
        assert_eq!(scan_markers("no markers at all"), "");
    }

    #[test]
    fn should_salvage_the_longest_plausible_run_after_start() {
        assert_eq!(
            scan_markers("START#Meet at noon, gate 4#@%x"),
            "Meet at noon, gate 4"
        );
        assert_eq!(scan_markers("STARTab#c"), "ab#c");
    }

    #[test]
    fn should_cap_salvaged_text_without_a_plausible_run() {
        let noise = "ab#".repeat(300);
        let salvaged = scan_markers(&format!("START{noise}"));

        assert_eq!(salvaged.len(), SALVAGE_MAX_CHARS);
        assert_eq!(salvaged, noise[..SALVAGE_MAX_CHARS]);
        // runs of exactly five chars are not long enough either
        let salvaged = scan_markers(&format!("START{}", "abcde#".repeat(100)));
        assert_eq!(salvaged.len(), SALVAGE_MAX_CHARS);
    }
}
