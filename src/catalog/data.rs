use crate::catalog::models::CatalogEntry;

/// Immutable registry of the portfolio works, grouped by kind. Built once at
/// startup; order within each group is the rendering order.
#[derive(Debug, Clone)]
pub struct ContentCatalog {
    products: Vec<CatalogEntry>,
    designs: Vec<CatalogEntry>,
    videos: Vec<CatalogEntry>,
}

impl ContentCatalog {
    pub fn new(
        products: Vec<CatalogEntry>,
        designs: Vec<CatalogEntry>,
        videos: Vec<CatalogEntry>,
    ) -> Self {
        Self {
            products,
            designs,
            videos,
        }
    }

    pub fn products(&self) -> &[CatalogEntry] {
        &self.products
    }

    pub fn designs(&self) -> &[CatalogEntry] {
        &self.designs
    }

    pub fn videos(&self) -> &[CatalogEntry] {
        &self.videos
    }

    /// Fixed presentation order: products, then designs, then videos.
    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.products
            .iter()
            .chain(self.designs.iter())
            .chain(self.videos.iter())
    }

    pub fn len(&self) -> usize {
        self.products.len() + self.designs.len() + self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The full set of showcased works.
    pub fn built_in() -> Self {
        Self::new(built_in_products(), built_in_designs(), built_in_videos())
    }
}

fn product(title: &str, description: &str, image_url: &str, tools: &[&str]) -> CatalogEntry {
    CatalogEntry::Product {
        title: title.to_string(),
        description: description.to_string(),
        image_url: image_url.to_string(),
        tools: tools.iter().map(|tool| (*tool).to_string()).collect(),
    }
}

fn design(title: &str, description: &str, image_url: &str) -> CatalogEntry {
    CatalogEntry::Design {
        title: title.to_string(),
        description: description.to_string(),
        image_url: image_url.to_string(),
    }
}

fn video(title: &str, description: &str, embed_url: &str, external_url: &str) -> CatalogEntry {
    CatalogEntry::Video {
        title: title.to_string(),
        description: description.to_string(),
        embed_url: embed_url.to_string(),
        external_url: external_url.to_string(),
    }
}

fn built_in_products() -> Vec<CatalogEntry> {
    vec![
        product(
            "Dish Soap Bottle",
            "Stylized transparent plastic bottle with colored liquid and realistic lighting",
            "https://i.imgur.com/NslPjJ3.png",
            &["Blender", "Cycles", "Product"],
        ),
        product(
            "Minimalist Perfume Bottle",
            "Frosted glass material with subtle reflections for a luxury cosmetic look",
            "https://i.imgur.com/V6fpOW9.jpeg",
            &["Blender", "Cycles", "Cosmetic"],
        ),
        product(
            "Whey Protein Jar",
            "High-detail product visualization with label design and soft studio lighting",
            "https://i.imgur.com/OKn8jFu.png",
            &["Blender", "Cycles", "Packaging"],
        ),
        product(
            "Medical Box Icon",
            "Stylized 3D model of a medical first-aid box for icons or games",
            "https://i.imgur.com/mAt0oNx.jpeg",
            &["Blender", "Cycles", "Stylized"],
        ),
        product(
            "Coca-Cola Can",
            "Realistic soda can design with branding and reflective aluminum material",
            "https://i.imgur.com/qUoTiaE.jpeg",
            &["Blender", "Cycles", "Product"],
        ),
        product(
            "Smartphone Mockup",
            "Modern phone concept render with subtle glow and reflections",
            "https://i.imgur.com/rVQYIjW.jpeg",
            &["Blender", "Cycles", "Tech"],
        ),
        product(
            "Supplement Bottle",
            "Plastic jar for supplement or protein packaging with clean lighting",
            "https://i.imgur.com/vbpaR0Z.jpeg",
            &["Blender", "Cycles", "Packaging"],
        ),
        product(
            "Spray Bottle",
            "Sleek cosmetic spray bottle design with metallic finish",
            "https://i.imgur.com/zTgt8BF.jpeg",
            &["Blender", "Cycles", "Cosmetic"],
        ),
        product(
            "Black Tumbler",
            "Stylized tumbler model with glossy black material for product mockups",
            "https://i.imgur.com/CBUV54m.jpeg",
            &["Blender", "Cycles", "Product"],
        ),
        product(
            "Plastic Kettle",
            "Simple water kettle in solid plastic material for home appliance modeling",
            "https://i.imgur.com/iVbVWX9.jpeg",
            &["Blender", "Cycles", "Product"],
        ),
        product(
            "Square Perfume Bottle",
            "Dark glass perfume bottle design with minimalist aesthetics",
            "https://i.imgur.com/eeV6JNv.jpeg",
            &["Blender", "Cycles", "Cosmetic"],
        ),
        product(
            "Woven Basket",
            "Handmade-style 3D basket with realistic weaving pattern",
            "https://i.imgur.com/Z2iyin6.jpeg",
            &["Blender", "Cycles", "Craft"],
        ),
        product(
            "Bread Rolls",
            "Realistic bakery-style bread rolls with detailed bump texture",
            "https://i.imgur.com/vaRzZun.jpeg",
            &["Blender", "Cycles", "Food"],
        ),
        product(
            "Safety Goggles",
            "Functional safety eyewear with semi-transparent plastic material",
            "https://i.imgur.com/QXLOsSe.jpeg",
            &["Blender", "Cycles", "Gear"],
        ),
        product(
            "Halloween Pumpkin",
            "Cute stylized pumpkin with witch hat, great for seasonal content",
            "https://i.imgur.com/bTjoecb.jpeg",
            &["Blender", "Cycles", "Stylized"],
        ),
        product(
            "Katana Sword",
            "Clean render of a curved Japanese sword with dark lighting setup",
            "https://i.imgur.com/oManWn1.jpeg",
            &["Blender", "Cycles", "Weapon"],
        ),
        product(
            "Wireless Mouse",
            "Modern mouse design with smooth contours and subtle reflections",
            "https://i.imgur.com/8k8rTah.jpeg",
            &["Blender", "Cycles", "Tech"],
        ),
        product(
            "Fish Cutting Board",
            "Cartoonish food scene featuring sliced fish on a wooden board",
            "https://i.imgur.com/DwkATyt.png",
            &["Blender", "Cycles", "Stylized"],
        ),
    ]
}

fn built_in_designs() -> Vec<CatalogEntry> {
    vec![
        design(
            "Brand Identity Design",
            "Modern branding concept with clean typography and bold colors",
            "https://i.imgur.com/OaxSf5q.jpeg",
        ),
        design(
            "Social Media Campaign",
            "Engaging content series for product launch",
            "https://i.imgur.com/S5JzCuF.jpeg",
        ),
        design(
            "Editorial Layout",
            "Magazine spread design with dynamic composition",
            "https://i.imgur.com/9WBI55D.jpeg",
        ),
        design(
            "Product Photography",
            "Minimalist product shots with natural lighting",
            "https://i.imgur.com/FlH2DrU.jpeg",
        ),
        design(
            "Digital Illustration",
            "Custom artwork for marketing materials",
            "https://i.imgur.com/rQxdlXM.jpeg",
        ),
        design(
            "UI/UX Design",
            "Mobile app interface with intuitive navigation",
            "https://i.imgur.com/2MLH0il.jpeg",
        ),
        design(
            "Food Packaging Design",
            "Creative packaging design for artisanal food products",
            "https://images.pexels.com/photos/1435904/pexels-photo-1435904.jpeg",
        ),
        design(
            "Event Poster Design",
            "Eye-catching poster for music festival",
            "https://images.pexels.com/photos/1293120/pexels-photo-1293120.jpeg",
        ),
        design(
            "Corporate Branding",
            "Complete brand identity package for tech startup",
            "https://images.pexels.com/photos/669615/pexels-photo-669615.jpeg",
        ),
        design(
            "Magazine Cover",
            "Contemporary magazine cover design",
            "https://images.pexels.com/photos/1591056/pexels-photo-1591056.jpeg",
        ),
        design(
            "Web Design",
            "Modern e-commerce website design",
            "https://images.pexels.com/photos/196644/pexels-photo-196644.jpeg",
        ),
        design(
            "Social Media Kit",
            "Cohesive social media template design",
            "https://images.pexels.com/photos/5082566/pexels-photo-5082566.jpeg",
        ),
        design(
            "Fashion Lookbook",
            "Seasonal collection showcase with editorial styling",
            "https://images.pexels.com/photos/994523/pexels-photo-994523.jpeg",
        ),
        design(
            "Restaurant Menu",
            "Elegant menu design with food photography",
            "https://images.pexels.com/photos/958545/pexels-photo-958545.jpeg",
        ),
        design(
            "Travel Brochure",
            "Destination marketing with stunning visuals",
            "https://images.pexels.com/photos/2325446/pexels-photo-2325446.jpeg",
        ),
        design(
            "Beauty Product Packaging",
            "Luxurious skincare product packaging design",
            "https://images.pexels.com/photos/4041392/pexels-photo-4041392.jpeg",
        ),
        design(
            "Festival Branding",
            "Complete visual identity for arts festival",
            "https://images.pexels.com/photos/1190297/pexels-photo-1190297.jpeg",
        ),
        design(
            "Book Cover Series",
            "Contemporary book cover designs for fiction series",
            "https://images.pexels.com/photos/694740/pexels-photo-694740.jpeg",
        ),
        design(
            "Wellness App Design",
            "Mobile app design for meditation and mindfulness",
            "https://images.pexels.com/photos/196644/pexels-photo-196644.jpeg",
        ),
        design(
            "Eco-Friendly Packaging",
            "Sustainable packaging design for organic products",
            "https://images.pexels.com/photos/4040644/pexels-photo-4040644.jpeg",
        ),
        design(
            "Annual Report Design",
            "Corporate annual report with infographics",
            "https://images.pexels.com/photos/669615/pexels-photo-669615.jpeg",
        ),
    ]
}

fn built_in_videos() -> Vec<CatalogEntry> {
    vec![
        video(
            "Product Launch Teaser",
            "Dynamic short-form video showcasing new product features",
            "https://www.instagram.com/reel/DHpS3L7NGCg/embed",
            "https://www.instagram.com/reel/DHpS3L7NGCg/",
        ),
        video(
            "Brand Story",
            "Engaging narrative about brand values and mission",
            "https://youtube.com/embed/7X2TizWoY0s",
            "https://youtube.com/shorts/7X2TizWoY0s?si=O7xL21D9hSOUQWcZ",
        ),
        video(
            "Tutorial Series",
            "Quick tips and tricks for creative software",
            "https://youtube.com/embed/GFXxY-5m6Ek",
            "https://youtube.com/shorts/GFXxY-5m6Ek",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_catalog_has_published_group_sizes() {
        let catalog = ContentCatalog::built_in();
        assert_eq!(catalog.products().len(), 18);
        assert_eq!(catalog.designs().len(), 21);
        assert_eq!(catalog.videos().len(), 3);
        assert_eq!(catalog.len(), 42);
    }

    #[test]
    fn every_entry_has_title_and_media() {
        let catalog = ContentCatalog::built_in();
        for entry in catalog.entries() {
            assert!(!entry.title().is_empty(), "entry should have a title");
            assert!(
                !entry.media_url().is_empty(),
                "entry {} should have a media url",
                entry.title()
            );
        }
    }

    #[test]
    fn entries_run_products_then_designs_then_videos() {
        let catalog = ContentCatalog::built_in();
        let titles: Vec<&str> = catalog.entries().map(CatalogEntry::title).collect();
        assert_eq!(titles[0], "Dish Soap Bottle");
        assert_eq!(titles[18], "Brand Identity Design");
        assert_eq!(titles[39], "Product Launch Teaser");
    }

    #[test]
    fn empty_catalog_is_valid() {
        let catalog = ContentCatalog::new(Vec::new(), Vec::new(), Vec::new());
        assert!(catalog.is_empty());
        assert_eq!(catalog.entries().count(), 0);
    }
}
