//! Built-in gallery - the image tree served under `/static/images`

use super::Catalog;

struct BuiltinItem {
    category: &'static str,
    name: &'static str,
    images: &'static [&'static str],
    description: Option<&'static str>,
}

const ITEMS: &[BuiltinItem] = &[
    BuiltinItem {
        category: "ceramics",
        name: "ash-glaze-bowl",
        images: &["front.jpg", "rim.jpg", "foot.jpg"],
        description: Some(
            "Wheel-thrown stoneware bowl with a wood-ash glaze that pools green in the well.",
        ),
    },
    BuiltinItem {
        category: "ceramics",
        name: "speckled-mug",
        images: &["front.jpg", "handle.jpg"],
        description: Some("Speckled buff clay, 350 ml, dishwasher safe."),
    },
    BuiltinItem {
        category: "ceramics",
        name: "tall-vase",
        images: &["front.jpg"],
        description: None,
    },
    BuiltinItem {
        category: "jewellery",
        name: "silver-band",
        images: &["front.jpg", "angle.jpg", "hallmark.jpg"],
        description: Some("Hand-forged sterling silver band with a hammered finish."),
    },
    BuiltinItem {
        category: "jewellery",
        name: "garnet-pendant",
        images: &["front.jpg", "clasp.jpg"],
        description: Some("Rose-cut garnet in a bezel setting on an 18 inch chain."),
    },
    BuiltinItem {
        category: "textiles",
        name: "indigo-scarf",
        images: &["folded.jpg", "detail.jpg", "worn.jpg"],
        description: Some("Shibori-dyed linen scarf, natural indigo vat."),
    },
    BuiltinItem {
        category: "textiles",
        name: "wool-throw",
        images: &["draped.jpg", "weave.jpg"],
        description: None,
    },
];

/// Add every built-in item: thumbnail beside the item directory,
/// images and description inside it.
pub fn seed(catalog: &mut Catalog) {
    for item in ITEMS {
        let dir = format!("{}/{}", item.category, item.name);
        catalog.add_file(&format!("{dir}.jpg"));
        catalog.add_file(&format!("{dir}/thumbnail.jpg"));
        for image in item.images {
            catalog.add_file(&format!("{dir}/{image}"));
        }
        if let Some(text) = item.description {
            catalog.add_text(&format!("{dir}/description.txt"), text);
        }
    }
}
