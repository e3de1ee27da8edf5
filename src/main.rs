use heapq::PriorityHeap;
use heapq::compare::ByKey;

#[derive(Debug, Clone, PartialEq)]
struct Job {
    name: &'static str,
    priority: u32,
}

fn job(name: &'static str, priority: u32) -> Job {
    return Job { name, priority };
}

fn main() {
    let mut jobs = PriorityHeap::with_comparator(ByKey::new(|job: &Job| job.priority));

    jobs.insert_all(vec![
        job("render", 3),
        job("fetch", 1),
        job("compile", 2),
        job("lint", 2),
        job("deploy", 5),
    ]);
    jobs.insert(job("notify", 4));

    // Lint got cancelled.
    jobs.remove(&job("lint", 2));

    println!("queued (heap order):");
    let mut cursor = jobs.unordered_cursor();
    while let Some(Ok(job)) = cursor.next(&jobs) {
        println!("  {:>8} p{}", job.name, job.priority);
    }

    println!("running:");
    for job in jobs.into_sorted_iter() {
        println!("  {:>8} p{}", job.name, job.priority);
    }
}
