use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tracelog::{Dump, Level, Logger, Policy};

fn benchmark_record(c: &mut Criterion) {
    let logger = Logger::new();

    let mut group = c.benchmark_group("logger_record");

    // 简单消息
    group.bench_function("plain", |b| {
        b.iter(|| {
            logger.info(black_box("Simple log message"));
            logger.clear();
        })
    });

    // 带换行的消息走收敛路径
    group.bench_function("collapse_heavy", |b| {
        let message = "line one\r\nline two\nline three\rline four\nline five";
        b.iter(|| {
            logger.info(black_box(message));
            logger.clear();
        })
    });

    // Debug 结构体经 Dump 渲染
    group.bench_function("dump_payload", |b| {
        #[derive(Debug)]
        #[allow(dead_code)]
        struct Payload {
            user_id: u64,
            action: &'static str,
            success: bool,
        }

        let payload = Payload {
            user_id: 12345,
            action: "login",
            success: true,
        };

        b.iter(|| {
            logger.debug(Dump(black_box(&payload)));
            logger.clear();
        })
    });

    group.finish();
}

fn benchmark_message_sizes(c: &mut Criterion) {
    let logger = Logger::new();

    let mut group = c.benchmark_group("message_sizes");

    for size in [10, 50, 100, 500, 1000].iter() {
        let message = "x".repeat(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &message, |b, msg| {
            b.iter(|| {
                logger.info(black_box(msg.as_str()));
                logger.clear();
            })
        });
    }

    group.finish();
}

fn benchmark_levels(c: &mut Criterion) {
    let logger = Logger::new();

    let mut group = c.benchmark_group("levels");
    group.throughput(Throughput::Elements(1));

    // 各级别的吞吐量
    for level in [
        Level::Debug,
        Level::Info,
        Level::Notice,
        Level::Warning,
        Level::Alert,
        Level::Fatal,
    ] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:?}", level)),
            &level,
            |b, &level| {
                b.iter(|| {
                    logger.record(black_box("Benchmark message"), level);
                    logger.clear();
                })
            },
        );
    }

    group.finish();
}

fn benchmark_flush(c: &mut Criterion) {
    let mut group = c.benchmark_group("flush");

    // 每轮记录 n 行再整体刷出到 file 驱动
    for lines in [1, 10, 100].iter() {
        group.bench_with_input(BenchmarkId::new("file_driver", lines), lines, |b, &n| {
            let temp_file = tempfile::NamedTempFile::new().unwrap();
            let policy =
                Policy::new().with("path", temp_file.path().to_string_lossy().to_string());
            let logger = Logger::new();

            b.iter(|| {
                for i in 0..n {
                    logger.info(black_box(format!("flush message {}", i)));
                }
                black_box(logger.flush("file", &policy)).unwrap();
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_record,
    benchmark_message_sizes,
    benchmark_levels,
    benchmark_flush
);
criterion_main!(benches);
