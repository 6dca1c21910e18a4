use catalog_domain::entity::Entity;
use catalog_macros::{entity, entity_id};
use uuid::Uuid;

#[entity_id]
struct ProductId(Uuid);

#[entity(id = ProductId)]
struct Product {
    name: String,
}

#[entity]
#[derive(Default)]
struct Tag {
    label: String,
}

fn main() {
    let id = ProductId::new(Uuid::new_v4());
    let a = Product {
        id: id.clone(),
        name: "a".to_string(),
    };
    let b = Product {
        id,
        name: "b".to_string(),
    };

    // 实体按标识判等，属性不同也视为同一实体
    assert!(a == b);
    assert_eq!(a.id(), b.id());
    let _ = format!("{:?}", a.clone());

    // 默认 id 类型为 String
    let tag = Tag {
        id: "t-1".to_string(),
        ..Default::default()
    };
    assert_eq!(tag.id(), "t-1");
    assert!(tag.label.is_empty());
}
