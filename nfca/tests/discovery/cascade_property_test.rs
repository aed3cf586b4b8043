#[path = "../common/mod.rs"]
mod common;

use nfca::discovery::{DiscoveryTimings, discover};
use nfca::frontend::{MockFrontEnd, MockReply};
use nfca::protocol::uid_checksum;
use proptest::prelude::*;

fn level2_attempted(mock: &MockFrontEnd) -> bool {
    mock.sent().iter().any(|f| f.data.first() == Some(&0x95))
}

proptest! {
    #[test]
    fn cascade_tag_always_escalates_to_seven_bytes(
        uid in any::<[u8; 7]>(),
        sak2 in any::<u8>(),
    ) {
        let mut mock = MockFrontEnd::new();
        mock.push_replies(nfca::test_support::double_cascade_script([0x04, 0x00], uid, 0x04, sak2));

        let out = discover(&mut mock, &DiscoveryTimings::default()).unwrap();
        let rec = out.tag().unwrap();
        prop_assert!(rec.uid.is_double());
        prop_assert_eq!(rec.uid.as_bytes(), &uid[..]);
        prop_assert!(level2_attempted(&mock));
    }

    #[test]
    fn other_first_byte_stays_single(
        uid in any::<[u8; 4]>().prop_filter("not a cascade tag", |u| u[0] != 0x88),
        sak in any::<u8>(),
    ) {
        let mut mock = MockFrontEnd::new();
        let mut cl1 = uid.to_vec();
        cl1.push(uid_checksum(&uid));
        mock.push_replies(vec![
            MockReply::Data(vec![0x04, 0x00]),
            MockReply::Data(cl1),
            MockReply::Data(vec![sak]),
        ]);

        let out = discover(&mut mock, &DiscoveryTimings::default()).unwrap();
        let rec = out.tag().unwrap();
        prop_assert_eq!(rec.uid.as_bytes(), &uid[..]);
        prop_assert!(!level2_attempted(&mock));
    }
}
