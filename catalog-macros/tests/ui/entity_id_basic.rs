use catalog_macros::entity_id;
use uuid::Uuid;

#[entity_id]
struct UserId(Uuid);

#[entity_id(debug = false)]
struct ProfileId(Uuid);

impl std::fmt::Debug for ProfileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ProfileId(..)")
    }
}

fn main() {
    let raw = Uuid::new_v4();
    let id = UserId::new(raw);
    let _ = format!("{:?}", id); // 默认启用 Debug，应可用
    assert_eq!(id.value(), &raw);

    // Display 与 FromStr 互逆
    let parsed: UserId = id.to_string().parse().unwrap();
    assert_eq!(parsed, id);
    assert!("not-a-uuid".parse::<UserId>().is_err());

    let pid = ProfileId::new(Uuid::new_v4());
    assert_eq!(format!("{:?}", pid), "ProfileId(..)"); // 使用手写 Debug，说明未自动派生

    let back: Uuid = UserId::from(raw).into();
    assert_eq!(back, raw);
}
