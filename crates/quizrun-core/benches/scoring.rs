use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quizrun_core::model::{Choices, Question, QuestionId};
use quizrun_core::scoring::{percentage, score};
use quizrun_core::session::QuizSession;

fn make_questions(n: usize) -> Vec<Question> {
    (0..n)
        .map(|i| {
            let choices: Choices = ["A", "B", "C", "D"]
                .into_iter()
                .map(|letter| (letter.to_string(), format!("choice {letter} of {i}")))
                .collect();
            Question {
                id: QuestionId::from(i as u64),
                prompt: format!("Question {i}"),
                choices,
                correct_answer: ["A", "B", "C", "D"][i % 4].to_string(),
                explanation: Some(format!("Explanation {i}")),
            }
        })
        .collect()
}

/// A submitted session with every other question answered.
fn completed_session(n: usize) -> QuizSession {
    let mut session = QuizSession::new();
    let questions = make_questions(n);
    let answers: Vec<_> = questions
        .iter()
        .step_by(2)
        .map(|q| q.id.clone())
        .collect();
    if session.start(questions).is_ok() {
        for id in &answers {
            let _ = session.record_answer(id, "B");
        }
        let _ = session.submit();
    }
    session
}

fn bench_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("score");

    for n in [10, 100, 1000] {
        let session = completed_session(n);
        group.bench_function(format!("{n}_questions"), |b| {
            b.iter(|| score(black_box(&session)))
        });
    }

    group.finish();
}

fn bench_percentage(c: &mut Criterion) {
    let mut group = c.benchmark_group("percentage");

    group.bench_function("2_of_3", |b| {
        b.iter(|| percentage(black_box(2), black_box(3)))
    });

    group.bench_function("sweep_1000", |b| {
        b.iter(|| {
            (0..=1000usize)
                .map(|c| percentage(black_box(c), 1000))
                .sum::<u32>()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_score, bench_percentage);
criterion_main!(benches);
