use playbook::error::StoreError;
use playbook::models::{PlaybookItem, Principle};
use playbook::storage::Storage;
use playbook::store::PlaybookStore;
use speculate2::speculate;

fn open_store() -> PlaybookStore {
    PlaybookStore::open(Storage::open_memory().expect("Failed to open in-memory storage"))
}

speculate! {
    before {
        let mut store = open_store();
    }

    describe "add_item" {
        it "appends a fresh item with default fields" {
            let added = store.add_item("ethos").expect("add failed");
            assert!(added);

            let items = &store.playbook().items;
            assert_eq!(items.len(), 1);
            assert_eq!(items[0].tactic_id, "ethos");
            assert_eq!(items[0].note, "");
            assert!(items[0].principle_keys.is_empty());
            assert_eq!(items[0].priority, 3);
            assert!(!items[0].done);
        }

        it "is a no-op for an already-adopted tactic" {
            store.add_item("ethos").expect("add failed");
            let before = store.playbook().clone();

            let added = store.add_item("ethos").expect("add failed");
            assert!(!added);
            assert_eq!(store.playbook(), &before);
        }

        it "preserves insertion order across adds" {
            store.add_item("ethos").expect("add failed");
            store.add_item("networks").expect("add failed");
            store.add_item("agency").expect("add failed");

            let ids: Vec<_> = store.playbook().items.iter()
                .map(|it| it.tactic_id.as_str())
                .collect();
            assert_eq!(ids, vec!["ethos", "networks", "agency"]);
        }

        it "rejects an id that is not in the catalog" {
            let err = store.add_item("charisma").unwrap_err();
            assert_eq!(err, StoreError::UnknownTactic("charisma".to_string()));
            assert!(store.playbook().items.is_empty());
        }
    }

    describe "update_item" {
        it "replaces the item wholesale" {
            store.add_item("ethos").expect("add failed");

            let mut next = store.playbook().items[0].clone();
            next.note = "Share the postmortem openly".to_string();
            next.principle_keys.insert(Principle::Authority);
            next.principle_keys.insert(Principle::Liking);

            store.update_item(0, next.clone()).expect("update failed");
            assert_eq!(store.playbook().items[0], next);
        }

        it "applies caller-clamped priority and done flag" {
            store.add_item("ethos").expect("add failed");

            // The input layer clamps before calling; 9 becomes 5.
            let requested: i64 = 9;
            let mut next = store.playbook().items[0].clone();
            next.priority = requested.clamp(1, 5) as u8;
            store.update_item(0, next).expect("update failed");

            let mut next = store.playbook().items[0].clone();
            next.done = true;
            store.update_item(0, next).expect("update failed");

            let item = &store.playbook().items[0];
            assert_eq!(item.priority, 5);
            assert!(item.done);
            assert!((1..=5).contains(&item.priority));
        }

        it "fails with IndexOutOfRange instead of truncating" {
            store.add_item("ethos").expect("add failed");

            let err = store.update_item(3, PlaybookItem::new("ethos")).unwrap_err();
            assert_eq!(err, StoreError::IndexOutOfRange { index: 3, len: 1 });
        }
    }

    describe "remove_item" {
        it "removes the target and keeps the remaining order" {
            store.add_item("ethos").expect("add failed");
            store.add_item("networks").expect("add failed");
            store.add_item("agency").expect("add failed");

            assert!(store.remove_item(1));

            let ids: Vec<_> = store.playbook().items.iter()
                .map(|it| it.tactic_id.as_str())
                .collect();
            assert_eq!(ids, vec!["ethos", "agency"]);
        }

        it "treats an out-of-range index as a no-op" {
            store.add_item("ethos").expect("add failed");
            let before = store.playbook().clone();

            assert!(!store.remove_item(5));
            assert_eq!(store.playbook(), &before);
        }
    }

    describe "rename" {
        it "replaces the name verbatim" {
            store.rename("  Q3 Influence Plan  ");
            assert_eq!(store.playbook().name, "  Q3 Influence Plan  ");
        }

        it "accepts the empty string" {
            store.rename("");
            assert_eq!(store.playbook().name, "");
        }
    }

    describe "checklist" {
        it "trims entries before appending" {
            assert!(store.add_checklist_entry("  Ask a question  "));
            assert_eq!(store.playbook().checklist, vec!["Ask a question"]);
        }

        it "ignores whitespace-only text" {
            assert!(!store.add_checklist_entry("  "));
            assert!(store.playbook().checklist.is_empty());
        }

        it "removes by position and keeps order" {
            store.add_checklist_entry("one");
            store.add_checklist_entry("two");
            store.add_checklist_entry("three");

            assert!(store.remove_checklist_entry(0));
            assert_eq!(store.playbook().checklist, vec!["two", "three"]);
        }

        it "treats an out-of-range removal as a no-op" {
            store.add_checklist_entry("one");
            assert!(!store.remove_checklist_entry(9));
            assert_eq!(store.playbook().checklist, vec!["one"]);
        }
    }
}
