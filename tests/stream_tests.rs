//! Integration tests for record reassembly and event decoding across
//! arbitrary chunk boundaries.

use nutrix_client::stream::event::AnalysisEvent;
use nutrix_client::stream::parser::{decode_record, EventStreamParser};

const REFERENCE_STREAM: &str = concat!(
    "data: {\"type\":\"chunk\",\"chunk\":\"Calories: 250\\n\"}\n\n",
    "data: {\"type\":\"chunk\",\"chunk\":\"Carbs: 45%\"}\n\n",
    "data: {\"type\":\"complete\",\"macros\":{\"carbs\":45,\"proteins\":30,\"fats\":25},\"image\":\"data:image/png;base64,AA\"}\n\n",
);

/// Run a sequence of chunks through the parser and decode everything
fn decode_chunks(chunks: &[&str]) -> Vec<AnalysisEvent> {
    let mut parser = EventStreamParser::new();
    let mut events = Vec::new();

    for chunk in chunks {
        for record in parser.feed(chunk) {
            events.extend(decode_record(&record));
        }
    }
    for record in parser.finish() {
        events.extend(decode_record(&record));
    }

    events
}

fn reference_events() -> Vec<AnalysisEvent> {
    decode_chunks(&[REFERENCE_STREAM])
}

#[test]
fn test_reference_stream_decodes() {
    let events = reference_events();

    assert_eq!(events.len(), 3);
    assert_eq!(
        events[0],
        AnalysisEvent::Chunk {
            text: "Calories: 250\n".to_string()
        }
    );
    assert_eq!(
        events[1],
        AnalysisEvent::Chunk {
            text: "Carbs: 45%".to_string()
        }
    );
    match &events[2] {
        AnalysisEvent::Complete { macros, image } => {
            let macros = macros.expect("macros should parse");
            assert_eq!(macros.carbs, 45.0);
            assert!(image.is_some());
        }
        other => panic!("expected complete event, got {:?}", other),
    }
}

#[test]
fn test_every_single_split_is_equivalent() {
    let expected = reference_events();

    for i in 0..=REFERENCE_STREAM.len() {
        let events = decode_chunks(&[&REFERENCE_STREAM[..i], &REFERENCE_STREAM[i..]]);
        assert_eq!(events, expected, "split at byte {} diverged", i);
    }
}

#[test]
fn test_every_pair_split_is_equivalent() {
    let stream = "data: {\"type\":\"chunk\",\"chunk\":\"ok\"}\n\ndata: {\"type\":\"error\",\"error\":\"bad\"}\n\n";
    let expected = decode_chunks(&[stream]);
    assert_eq!(expected.len(), 2);

    for i in 0..=stream.len() {
        for j in i..=stream.len() {
            let events = decode_chunks(&[&stream[..i], &stream[i..j], &stream[j..]]);
            assert_eq!(events, expected, "splits at bytes {} and {} diverged", i, j);
        }
    }
}

#[test]
fn test_split_inside_json_payload() {
    // The exact fragmentation scenario: marker, type tag and payload all
    // split mid-token
    let events = decode_chunks(&[
        "data: {\"typ",
        "e\":\"chunk\",\"chunk\":\"Cal",
        "ories: 250\"}\n\n",
    ]);

    assert_eq!(
        events,
        vec![AnalysisEvent::Chunk {
            text: "Calories: 250".to_string()
        }]
    );
}

#[test]
fn test_zero_length_chunks_are_harmless() {
    let expected = reference_events();
    let events = decode_chunks(&["", REFERENCE_STREAM, "", ""]);

    assert_eq!(events, expected);
}

#[test]
fn test_trailing_record_without_delimiter() {
    let stream = REFERENCE_STREAM.trim_end_matches('\n');
    let events = decode_chunks(&[stream]);

    assert_eq!(events, reference_events());
}

#[test]
fn test_unparsable_tail_is_discarded() {
    let events = decode_chunks(&[
        "data: {\"type\":\"chunk\",\"chunk\":\"ok\"}\n\ndata: {\"type\":\"chu",
    ]);

    assert_eq!(
        events,
        vec![AnalysisEvent::Chunk {
            text: "ok".to_string()
        }]
    );
}

#[test]
fn test_whitespace_only_records_are_skipped() {
    let events = decode_chunks(&["\n\n  \n\ndata: {\"type\":\"chunk\",\"chunk\":\"x\"}\n\n\n\n"]);

    assert_eq!(
        events,
        vec![AnalysisEvent::Chunk {
            text: "x".to_string()
        }]
    );
}
