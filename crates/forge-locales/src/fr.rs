//! French dataset. Accented names exercise the NFKD decomposition path.

use crate::LocaleData;

pub const FR: LocaleData = LocaleData {
    code: "fr",
    first_names: &[
        "Amélie", "Anaïs", "André", "Aurélie", "Benoît", "Camille", "Cécile", "Chloé", "Clément",
        "Élodie", "Émile", "Étienne", "Eugène", "François", "Frédéric", "Gaëlle", "Hélène",
        "Inès", "Jérôme", "Joël", "Léa", "Loïc", "Lucie", "Maëlle", "Mathéo", "Noémie",
        "Océane", "Rémi", "Renée", "Séverine", "Théo", "Zoé",
    ],
    last_names: &[
        "Bélanger", "Bernard", "Blanchard", "Boucher", "Bourgeois", "Chevalier", "Côté",
        "Delacroix", "Deschamps", "Dubois", "Dupré", "Durand", "Fabre", "Fontaine", "Fournier",
        "Gagné", "Garnier", "Girard", "Lefèvre", "Lemaître", "Lévesque", "Marchand", "Mercier",
        "Moreau", "Pelletier", "Perrault", "Renard", "Rousseau", "Roux", "Séguin", "Vasseur",
        "Véron",
    ],
    domains: &[
        "example.fr",
        "exemple.example.com",
        "courriel.example.net",
        "example.org",
    ],
    street_names: &[
        "Rue de la République",
        "Avenue des Tilleuls",
        "Boulevard Saint-Michel",
        "Rue des Lilas",
        "Place du Marché",
        "Rue Victor Hugo",
        "Allée des Peupliers",
        "Chemin du Moulin",
        "Rue de l'Église",
        "Impasse des Rosiers",
    ],
    cities: &[
        "Lyon",
        "Bordeaux",
        "Nantes",
        "Grenoble",
        "Orléans",
        "Besançon",
        "Angoulême",
        "Nîmes",
        "Sète",
        "Alès",
        "Mâcon",
        "Annecy",
    ],
};
