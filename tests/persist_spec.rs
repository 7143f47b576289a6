use playbook::models::{Playbook, Principle};
use playbook::persist::{Persistence, STORAGE_KEY};
use playbook::storage::Storage;
use playbook::store::PlaybookStore;
use speculate2::speculate;

speculate! {
    before {
        let storage = Storage::open_memory().expect("Failed to open in-memory storage");
    }

    describe "load" {
        it "returns the default playbook when the slot is empty" {
            let persist = Persistence::new(storage.clone());
            let book = persist.load();

            assert_eq!(book, Playbook::initialize());
            assert_eq!(book.name, "My Playbook");
            assert!(book.items.is_empty());
            assert!(book.checklist.is_empty());
        }

        it "degrades to the default on non-JSON garbage" {
            storage.set(STORAGE_KEY, "{not json%%").expect("set failed");

            let persist = Persistence::new(storage.clone());
            assert_eq!(persist.load(), Playbook::initialize());
        }

        it "discards the whole document when one item is malformed" {
            // Structurally broken items array: priority is not a number.
            storage.set(
                STORAGE_KEY,
                r#"{"name":"Mine","items":[{"tacticId":"ethos","note":"",
                    "principleKeys":[],"priority":"high"}],"checklist":["keep"]}"#,
            ).expect("set failed");

            let persist = Persistence::new(storage.clone());
            assert_eq!(persist.load(), Playbook::initialize());
        }

        it "defaults a missing done flag to false" {
            storage.set(
                STORAGE_KEY,
                r#"{"name":"Mine","items":[{"tacticId":"ethos","note":"",
                    "principleKeys":["liking"],"priority":2}],"checklist":[]}"#,
            ).expect("set failed");

            let persist = Persistence::new(storage.clone());
            let book = persist.load();
            assert!(!book.items[0].done);
            assert!(book.items[0].principle_keys.contains(&Principle::Liking));
        }
    }

    describe "round-trip" {
        it "restores a playbook built through store operations field for field" {
            let mut store = PlaybookStore::open(storage.clone());
            store.rename("Owen's Plan");
            store.add_item("ethos").expect("add failed");
            store.add_item("networks").expect("add failed");
            store.add_item("lbj_agenda").expect("add failed");

            let mut next = store.playbook().items[1].clone();
            next.note = "Two new weak ties this week".to_string();
            next.priority = 5;
            next.done = true;
            next.principle_keys.insert(Principle::Reciprocity);
            next.principle_keys.insert(Principle::SocialProof);
            store.update_item(1, next).expect("update failed");

            store.add_checklist_entry("Open with a story");
            store.add_checklist_entry("Thank the messenger of bad news");
            let expected = store.playbook().clone();
            drop(store);

            let reopened = PlaybookStore::open(storage.clone());
            assert_eq!(reopened.playbook(), &expected);
        }

        it "preserves item and checklist order across save and load" {
            let mut store = PlaybookStore::open(storage.clone());
            for id in ["agency", "ethos", "might", "coalitions"] {
                store.add_item(id).expect("add failed");
            }
            store.remove_item(2);
            store.add_checklist_entry("b");
            store.add_checklist_entry("a");
            drop(store);

            let reopened = PlaybookStore::open(storage.clone());
            let ids: Vec<_> = reopened.playbook().items.iter()
                .map(|it| it.tactic_id.as_str())
                .collect();
            assert_eq!(ids, vec!["agency", "ethos", "coalitions"]);
            assert_eq!(reopened.playbook().checklist, vec!["b", "a"]);
        }
    }

    describe "wire format" {
        it "writes camelCase field names on the wire" {
            let mut store = PlaybookStore::open(storage.clone());
            store.add_item("ethos").expect("add failed");

            let mut next = store.playbook().items[0].clone();
            next.principle_keys.insert(Principle::SocialProof);
            store.update_item(0, next).expect("update failed");

            let raw = storage.get(STORAGE_KEY).expect("get failed").expect("slot empty");
            let doc: serde_json::Value = serde_json::from_str(&raw).expect("invalid JSON");

            let item = &doc["items"][0];
            assert_eq!(item["tacticId"], "ethos");
            assert_eq!(item["principleKeys"][0], "socialproof");
            assert_eq!(item["priority"], 3);
            assert_eq!(item["done"], false);
        }
    }

    describe "on-disk storage" {
        it "survives closing and reopening the database file" {
            let dir = tempfile::tempdir().expect("Failed to create temp dir");
            let path = dir.path().join("playbook.db");

            let mut store = PlaybookStore::open(
                Storage::open(path.clone()).expect("Failed to open storage"),
            );
            store.add_item("pathos").expect("add failed");
            store.rename("On Disk");
            let expected = store.playbook().clone();
            drop(store);

            let reopened = PlaybookStore::open(
                Storage::open(path).expect("Failed to reopen storage"),
            );
            assert_eq!(reopened.playbook(), &expected);
        }
    }

    describe "export" {
        it "writes a pretty-printed file named after the playbook" {
            let dir = tempfile::tempdir().expect("Failed to create temp dir");

            let mut store = PlaybookStore::open(storage.clone());
            store.rename("My Influence Plan");
            store.add_item("exchange").expect("add failed");

            let path = playbook::export::write_to_dir(store.playbook(), dir.path())
                .expect("export failed");
            assert_eq!(
                path.file_name().and_then(|n| n.to_str()),
                Some("My_Influence_Plan.json")
            );

            let raw = std::fs::read_to_string(&path).expect("read failed");
            let back: Playbook = serde_json::from_str(&raw).expect("invalid JSON");
            assert_eq!(&back, store.playbook());
        }
    }
}
