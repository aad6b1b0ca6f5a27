//! Branching fixtures (6 runs): loop, chain, switch, br_table, rand.
//!
//! Values for generator-driven fixtures come from `srand(50)` on the
//! reference runtime, whose first draws are 1943526997, 693048727,
//! 1850007113, 1925127658, 2054429178, 498528091 and 848882219.

use gauntlet_common::{FixtureKind, DEFAULT_SEED};

use super::{case, FixtureSpec};

const K0: i32 = 1943526997;
const K1: i32 = 693048727;
const K2: i32 = 1850007113;
const K3: i32 = 1925127658;
const K4: i32 = 2054429178;
const K5: i32 = 498528091;
const K6: i32 = 848882219;

pub fn fixtures() -> Vec<FixtureSpec> {
    vec![
        // ForLoop: 5 iterations; partial sums 693048777, -1751911406,
        // 173216252, -2067321866, -1568793775.
        FixtureSpec {
            id: "ForLoop",
            intent: "Bounded loop that exits early when the running sum hits a sentinel",
            kind: FixtureKind::ForLoop,
            seed: DEFAULT_SEED,
            main_expected: Some(-1568793775),
            witness_cases: vec![
                case(&[10, 10], -1568793775),
                case(&[693048777, 42], 42),
                case(&[-1751911406, 7], 7),
                case(&[-1568793775, 3], 3),
                case(&[50, 0], -1568793775),
            ],
        },
        // srand(1) leaves state 0, so the first draw (and the count) is 0.
        FixtureSpec {
            id: "ForLoop_zero_iterations",
            intent: "Bounded loop whose iteration count is zero returns the initial sum",
            kind: FixtureKind::ForLoop,
            seed: 1,
            main_expected: Some(50),
            witness_cases: vec![case(&[10, 10], 50), case(&[50, 9], 50)],
        },
        // Seven calls on one instance walk the chain, then run past it.
        FixtureSpec {
            id: "IfElseChain",
            intent: "Five-way if/else chain returns the index of the first target equal to rand()",
            kind: FixtureKind::IfElseChain,
            seed: DEFAULT_SEED,
            main_expected: Some(-1),
            witness_cases: vec![
                case(&[K0, K1, K2, K3, K4], 0),
                case(&[K0, K1, K2, K3, K4], 1),
                case(&[K0, K1, K2, K3, K4], 2),
                case(&[K0, K1, K2, K3, K4], 3),
                case(&[K0, K1, K2, K3, K4], 4),
                case(&[K0, K1, K2, K3, K4], -1),
                case(&[K0, K1, K2, K3, K4], -1),
            ],
        },
        FixtureSpec {
            id: "Switch",
            intent: "Six-case switch lowered to a jump table with a -1 default",
            kind: FixtureKind::Switch,
            seed: DEFAULT_SEED,
            main_expected: Some(-1),
            witness_cases: vec![
                case(&[0], 10),
                case(&[1], 13),
                case(&[2], 17),
                case(&[3], 20),
                case(&[4], 100),
                case(&[5], 1000),
                case(&[6], -1),
                case(&[-100], -1),
                case(&[100], -1),
                case(&[i32::MIN], -1),
                case(&[i32::MAX], -1),
            ],
        },
        FixtureSpec {
            id: "br_table",
            intent: "br_table selecting one of four arguments with a -1 default label",
            kind: FixtureKind::BrTable,
            seed: DEFAULT_SEED,
            main_expected: None,
            witness_cases: vec![
                case(&[0, 3, 6, 9, 12], 3),
                case(&[1, 3, 6, 9, 12], 6),
                case(&[2, 3, 6, 9, 12], 9),
                case(&[3, 3, 6, 9, 12], 12),
                case(&[4, 3, 6, 9, 12], -1),
                case(&[100, 3, 6, 9, 12], -1),
                case(&[-100, 3, 6, 9, 12], -1),
            ],
        },
        FixtureSpec {
            id: "Rand",
            intent: "Exported srand/rand reproduce the reference libc sequence",
            kind: FixtureKind::Rand,
            seed: DEFAULT_SEED,
            main_expected: Some(K0),
            witness_cases: vec![
                case(&[], K0),
                case(&[], K1),
                case(&[], K2),
                case(&[], K3),
                case(&[], K4),
                case(&[], K5),
                case(&[], K6),
            ],
        },
    ]
}
