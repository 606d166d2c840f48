use std::sync::{Arc, Barrier};
use std::thread;

use rust_decimal::Decimal;

use wallet_ledger::domain::{Amount, Direction, Error, PageRequest};
use wallet_ledger::ledger::Ledger;
use wallet_ledger::store::InMemoryStore;

fn amt(v: i64) -> Amount {
    Amount::new(Decimal::from(v)).unwrap()
}

#[test]
fn concurrent_debits_never_overdraw() {
    let ledger = Arc::new(Ledger::new(InMemoryStore::new()));
    ledger.open_wallet(1).unwrap();
    ledger
        .credit(1, amt(55), "Starter float", "admin_topup", None)
        .unwrap();

    let barrier = Arc::new(Barrier::new(10));
    let handles: Vec<_> = (0..10u64)
        .map(|i| {
            let ledger = Arc::clone(&ledger);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                ledger.debit(
                    1,
                    amt(10),
                    &format!("User Registration: BC-{i}"),
                    "user_registration",
                    Some(1000 + i),
                    Some(1),
                )
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let committed = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(committed, 5, "floor(55 / 10) debits may commit");
    for result in &results {
        if let Err(e) = result {
            assert!(matches!(e, Error::InsufficientFunds { .. }));
        }
    }

    let wallet = ledger.balance(1).unwrap();
    assert_eq!(wallet.balance, Decimal::from(5));
    assert!(wallet.is_balanced());

    let entries = ledger.statement(1, PageRequest::new(0, 100)).unwrap();
    let debits = entries
        .iter()
        .filter(|e| e.direction == Direction::Debit)
        .count();
    assert_eq!(debits, 5, "bounced debits must not be logged");
}

#[test]
fn interleaved_credits_and_debits_conserve_money() {
    let ledger = Arc::new(Ledger::new(InMemoryStore::new()));
    ledger.open_wallet(7).unwrap();

    let barrier = Arc::new(Barrier::new(4));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let ledger = Arc::clone(&ledger);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for _ in 0..50 {
                    ledger
                        .credit(7, amt(7), "Topup", "admin_topup", None)
                        .unwrap();
                    // Some of these lose the race and bounce; that's fine.
                    let _ = ledger.debit(7, amt(5), "fee", "user_registration", None, None);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let wallet = ledger.balance(7).unwrap();
    assert!(wallet.is_balanced());

    let mut entries = ledger.statement(7, PageRequest::new(0, 1_000)).unwrap();
    entries.sort_by_key(|e| e.seq);

    let mut running = Decimal::ZERO;
    for e in &entries {
        assert_eq!(e.balance_before, running, "entries chain on balance_before");
        match e.direction {
            Direction::Credit => running += e.amount,
            Direction::Debit => running -= e.amount,
        }
        assert_eq!(e.balance_after, running);
        assert!(running >= Decimal::ZERO);
    }
    assert_eq!(running, wallet.balance);

    let credited: Decimal = entries
        .iter()
        .filter(|e| e.direction == Direction::Credit)
        .map(|e| e.amount)
        .sum();
    let spent: Decimal = entries
        .iter()
        .filter(|e| e.direction == Direction::Debit)
        .map(|e| e.amount)
        .sum();
    assert_eq!(credited, wallet.total_earned);
    assert_eq!(spent, wallet.total_spent);
}
