//! Benchmarks for pptdeck parsing performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks test deck assembly and snapshot writing at various
//! slide counts.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pptdeck::ParseOptions;
use std::io::Cursor;

/// Creates a synthetic PPTX with the given number of slides, each holding a
/// solid background, a few text shapes and one picture.
fn create_test_pptx(slide_count: usize) -> Vec<u8> {
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    let mut buffer = Vec::new();
    let mut zip = ZipWriter::new(Cursor::new(&mut buffer));

    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

    zip.start_file("ppt/media/image1.png", options).unwrap();
    zip.write_all(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A])
        .unwrap();

    for i in 1..=slide_count {
        let mut shapes = String::new();
        for p in 0..5 {
            shapes.push_str(&format!(
                r#"<p:sp><p:txBody><a:bodyPr/><a:p><a:r><a:t>Slide {} paragraph {}</a:t></a:r><a:r><a:t> with some benchmark text.</a:t></a:r></a:p></p:txBody></p:sp>"#,
                i, p
            ));
        }
        shapes.push_str(
            r#"<p:pic><p:blipFill><a:blip r:embed="rId2"/></p:blipFill><p:spPr/></p:pic>"#,
        );

        let slide = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">
  <p:cSld>
    <p:bg><p:bgPr><a:solidFill><a:srgbClr val="1F4E79"/></a:solidFill></p:bgPr></p:bg>
    <p:spTree><p:nvGrpSpPr/><p:grpSpPr/>{}</p:spTree>
  </p:cSld>
</p:sld>"#,
            shapes
        );
        zip.start_file(format!("ppt/slides/slide{}.xml", i), options)
            .unwrap();
        zip.write_all(slide.as_bytes()).unwrap();

        zip.start_file(format!("ppt/slides/_rels/slide{}.xml.rels", i), options)
            .unwrap();
        zip.write_all(
            br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/image" Target="../media/image1.png"/>
</Relationships>"#,
        )
        .unwrap();
    }

    zip.finish().unwrap();
    buffer
}

/// Benchmark deck assembly, sequential and parallel.
fn bench_deck_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("deck_parsing");

    for slide_count in [1, 10, 50, 200].iter() {
        let data = create_test_pptx(*slide_count);
        group.throughput(Throughput::Bytes(data.len() as u64));

        for (label, parallel) in [("sequential", false), ("parallel", true)] {
            let options = ParseOptions::new().with_parallel(parallel);
            group.bench_with_input(
                BenchmarkId::new(label, slide_count),
                &data,
                |b, data| {
                    b.iter(|| {
                        let _ = pptdeck::parse_bytes_with_options(black_box(data), options.clone());
                    });
                },
            );
        }
    }

    group.finish();
}

/// Benchmark snapshot serialization.
fn bench_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot");

    for slide_count in [10, 50].iter() {
        let data = create_test_pptx(*slide_count);
        let deck = pptdeck::parse_bytes(&data).unwrap();

        group.bench_with_input(BenchmarkId::new("slides", slide_count), &deck, |b, deck| {
            b.iter(|| {
                let _ = pptdeck::snapshot::to_json_default(black_box(deck));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_deck_parsing, bench_snapshot);
criterion_main!(benches);
